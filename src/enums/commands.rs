use clap::Subcommand;
use crate::enums::transaction_status::TransactionStatus;
use crate::enums::transaction_type::TransactionType;
use crate::enums::user_type::UserType;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Sign in and store the access token
    Login {
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        password: String,
    },
    /// Create an account and store the access token
    Register {
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        password: String,
        #[clap(long)]
        full_name: String,
        #[clap(long, default_value = "")]
        address: String,
        #[clap(long, value_enum, default_value_t = UserType::User)]
        user_type: UserType,
    },
    /// Sign out and forget the stored token
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Manage booked sessions
    #[clap(subcommand)]
    Sessions(SessionCommands),
    /// Manage leads
    #[clap(subcommand)]
    Leads(LeadCommands),
    /// Browse the transaction ledger
    #[clap(subcommand)]
    Transactions(TransactionCommands),
    /// Your own appointments
    #[clap(subcommand)]
    Appointments(AppointmentCommands),
    /// Browse the course catalog
    #[clap(subcommand)]
    Courses(CourseCommands),
}

#[derive(Subcommand)]
pub enum SessionCommands {
    List {
        #[clap(short, long, default_value = "")]
        search: String,
        #[clap(long)]
        export: bool,
    },
    Slots {
        #[clap(short, long)]
        date: Option<String>,
    },
    Reschedule {
        session_code: String,
        #[clap(long)]
        slot: Option<String>,
        #[clap(short, long)]
        date: Option<String>,
    },
    Next,
    Join {
        session_code: String,
    },
}

#[derive(Subcommand)]
pub enum LeadCommands {
    List {
        #[clap(short, long, default_value = "")]
        search: String,
        #[clap(long)]
        export: bool,
    },
    Show {
        lead_id: String,
    },
    Status {
        lead_id: String,
        status: String,
    },
}

#[derive(Subcommand)]
pub enum TransactionCommands {
    List {
        #[clap(short, long, default_value_t = 1)]
        page: u32,
        #[clap(long = "type", value_enum)]
        kind: Option<TransactionType>,
        #[clap(long)]
        channel: Option<String>,
        #[clap(long, value_enum)]
        status: Option<TransactionStatus>,
        #[clap(short, long, default_value = "")]
        search: String,
        #[clap(long)]
        export: bool,
    },
}

#[derive(Subcommand)]
pub enum AppointmentCommands {
    List,
    Slots {
        #[clap(short, long)]
        date: Option<String>,
    },
    Book {
        #[clap(short, long)]
        date: Option<String>,
        #[clap(long)]
        slot: Option<String>,
        #[clap(short, long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CourseCommands {
    List,
    Show {
        course_id: String,
    },
}
