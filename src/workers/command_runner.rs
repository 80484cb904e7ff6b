use std::io::{self, Write};
use std::str::FromStr;
use std::time::Instant;
use chrono::{Local, NaiveDate, NaiveDateTime};
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::{AppointmentCommands, Commands, CourseCommands, LeadCommands, SessionCommands, TransactionCommands};
use crate::enums::lead_status::LeadStatus;
use crate::enums::transaction_status::TransactionStatus;
use crate::enums::transaction_type::TransactionType;
use crate::enums::user_type::UserType;
use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::helpers::date_helper::DateHelper;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::table_logger::TableLogger;
use crate::services::api_client::ApiClient;
use crate::services::appointments::Appointments;
use crate::services::auth_context::AuthContext;
use crate::services::course_catalog::CourseCatalog;
use crate::services::lead_list::LeadListController;
use crate::services::report_exporter::{leads_report, sessions_report, transactions_report, ReportExporter};
use crate::services::reschedule_flow::RescheduleFlow;
use crate::services::session_list::SessionListController;
use crate::services::slot_fetcher::SlotFetcher;
use crate::services::transaction_list::TransactionListController;
use crate::structs::auth::{LoginRequest, RegisterRequest};
use crate::structs::config::config::Config;
use crate::structs::slot::Slot;
use crate::structs::transaction::TransactionFilters;
use crate::traits::backend::Backend;

/// Everything a remote command needs, built once per invocation.
struct Desk {
    config: Config,
    auth: AuthContext,
    client: ApiClient,
}

impl Desk {
    fn connect() -> ArcdeskResult<Self> {
        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'arcdesk init' to create a configuration file.");
                return Err(e);
            }
        };

        let auth = AuthContext::load(ConfigManager::token_path(&config), &config.auth.token_env)?;
        let client = ApiClient::new(&config.api, &auth)
            .map_err(|e| ArcdeskError::from_api("Failed to build HTTP client", e))?;

        Ok(Self { config, auth, client })
    }

    fn exporter(&self) -> ReportExporter {
        ReportExporter::from_config(&self.config.output)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ArcdeskResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Login { email, password } => self.login_command(email, password).await,
            Commands::Register { email, password, full_name, address, user_type } => {
                self.register_command(email, password, full_name, address, user_type).await
            }
            Commands::Logout => self.logout_command().await,
            Commands::Whoami => self.whoami_command().await,
            Commands::Sessions(command) => self.sessions_command(command).await,
            Commands::Leads(command) => self.leads_command(command).await,
            Commands::Transactions(TransactionCommands::List { page, kind, channel, status, search, export }) => {
                self.transactions_command(page, kind, channel, status, &search, export).await
            }
            Commands::Appointments(command) => self.appointments_command(command).await,
            Commands::Courses(command) => self.courses_command(command).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> ArcdeskResult<()> {
        log::info!("🚀 Initializing arcdesk configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔧 Run 'arcdesk validate' to check your configuration.");
                log::info!("🔑 Run 'arcdesk login' to sign in.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e.banner());
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> ArcdeskResult<()> {
        log::info!("🔍 Validating configuration at {}", ConfigManager::config_path().display());
        let config = ConfigManager::load()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("   API:    {}", config.api.base_url);
                log::info!("   Public: {}", config.api.public_base_url);
                log::info!("   Exports: {}", config.output.export_dir);
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("   ❌ {}", error);
                }
                Err(ArcdeskError::config_error(
                    &format!("{} configuration problem(s) found", errors.len()),
                    None,
                    Some("Fix the fields listed above"),
                ))
            }
        }
    }

    async fn login_command(&self, email: String, password: String) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;
        let response = AnimatedLogger::track(
            "🔑 Signing in",
            "Signed in",
            desk.client.login(LoginRequest { email: email.clone(), password }),
        )
        .await
        .map_err(|e| ArcdeskError::from_api("Login failed", e))?;

        desk.auth.set_token(&response.token)?;
        log::info!("✅ Logged in as {}", email);
        Ok(())
    }

    async fn register_command(
        &self,
        email: String,
        password: String,
        full_name: String,
        address: String,
        user_type: UserType,
    ) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;
        let addresses = Some(address.trim().to_string()).filter(|a| !a.is_empty()).into_iter().collect();
        let request = RegisterRequest { email: email.clone(), password, full_name, addresses, user_type };

        let response = AnimatedLogger::track("📝 Creating account", "Account created", desk.client.register(request))
            .await
            .map_err(|e| ArcdeskError::from_api("Registration failed", e))?;

        desk.auth.set_token(&response.token)?;
        if let Some(message) = response.message {
            log::info!("💬 {}", message);
        }
        log::info!("✅ Registered and logged in as {}", email);
        Ok(())
    }

    async fn logout_command(&self) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;
        if !desk.auth.is_authenticated() {
            log::info!("ℹ️  Not logged in");
            return Ok(());
        }

        // The local token goes away even when the backend call fails.
        if let Err(e) = desk.client.logout().await {
            log::warn!("⚠️  Logout request failed: {}", e);
        }
        desk.auth.clear()?;
        log::info!("👋 Logged out");
        Ok(())
    }

    async fn whoami_command(&self) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;
        let user = desk
            .client
            .current_user()
            .await
            .map_err(|e| ArcdeskError::from_api("Failed to load your profile", e))?;

        println!("👤 {}", user.full_name.as_deref().unwrap_or("N/A"));
        println!("   Email: {}", user.email);
        println!("   Role:  {:?}", user.user_type.unwrap_or_default());
        Ok(())
    }

    async fn load_sessions(&self, desk: &Desk) -> ArcdeskResult<SessionListController> {
        let mut sessions = SessionListController::new();
        let mut spinner = AnimatedLogger::new("📡 Loading sessions");
        spinner.start();
        match sessions.load(&desk.client).await {
            Ok(()) => spinner.stop(&format!("Loaded {} session(s)", sessions.sessions().len())).await,
            Err(e) => {
                spinner.error(sessions.error().unwrap_or("Failed to fetch sessions")).await;
                return Err(e);
            }
        }
        Ok(sessions)
    }

    async fn sessions_command(&self, command: SessionCommands) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;

        match command {
            SessionCommands::List { search, export } => {
                let mut sessions = self.load_sessions(&desk).await?;
                sessions.search(&search);
                TableLogger::print_sessions(sessions.filtered(), sessions.sessions(), now());
                println!("{}", sessions.summary());

                if export {
                    let report = sessions_report(sessions.filtered(), sessions.query());
                    desk.exporter().export("sessions", &report, now())?;
                }
                Ok(())
            }
            SessionCommands::Slots { date } => {
                let date = SlotFetcher::resolve_date(date.as_deref(), None, today());
                let slots = SlotFetcher::fetch_available_slots(&desk.client, &date).await;
                TableLogger::print_slots(&date, &slots);
                Ok(())
            }
            SessionCommands::Reschedule { session_code, slot, date } => {
                self.reschedule(&desk, &session_code, slot, date).await
            }
            SessionCommands::Next => {
                let sessions = self.load_sessions(&desk).await?;
                match sessions.next_session(now()) {
                    Some(next) => {
                        println!("⏰ Next session: {} with {}", next.session_code, next.email);
                        println!("   {} at {} ({})", DateHelper::display_date(&next.date), next.time, next.runtime_label());
                        if let Some(link) = next.joining_link.as_deref() {
                            println!("   🔗 {link}");
                        }
                    }
                    None => println!("📭 No upcoming scheduled sessions"),
                }
                Ok(())
            }
            SessionCommands::Join { session_code } => {
                let sessions = self.load_sessions(&desk).await?;
                let link = sessions.join_link(&session_code)?;
                log::info!("🔗 Opening {}", link);
                webbrowser::open(&link).map_err(|e| ArcdeskError::system_error("open meeting link", &e.to_string()))?;
                Ok(())
            }
        }
    }

    async fn reschedule(&self, desk: &Desk, session_code: &str, slot: Option<String>, date: Option<String>) -> ArcdeskResult<()> {
        let mut sessions = self.load_sessions(desk).await?;
        let session = sessions
            .find(session_code)
            .cloned()
            .ok_or_else(|| ArcdeskError::not_found("Session", session_code))?;

        if !session.status.is_actionable() {
            return Err(ArcdeskError::validation_error(
                "status",
                session.status.as_str(),
                "Cancelled or completed sessions cannot be rescheduled",
                None,
            ));
        }

        log::info!("🔄 Rescheduling {} ({} {})", session.session_code, session.date, session.time);
        let mut flow = RescheduleFlow::new();
        let slots = flow.open_and_load(&desk.client, session, date.as_deref(), today()).await.to_vec();

        if slots.is_empty() {
            log::warn!("📭 No slots available for that date. Try --date with another day.");
            flow.close();
            return Ok(());
        }

        let choice = match slot {
            Some(code) => Some(code),
            None => Self::prompt_slot(&slots)?,
        };
        if let Some(code) = choice {
            flow.select_slot(&code)?;
        }

        let updated = flow.submit(&desk.client, &mut sessions).await?;
        println!(
            "✅ {} is now on {} at {} ({})",
            updated.session_code,
            DateHelper::display_date(&updated.date),
            updated.time,
            updated.status.label()
        );
        Ok(())
    }

    /// Numbered pick list on stdin. Accepts a number or a slot code; blank picks nothing.
    fn prompt_slot(slots: &[Slot]) -> ArcdeskResult<Option<String>> {
        println!("\n🕒 Available slots:");
        for (i, slot) in slots.iter().enumerate() {
            println!("  {}. {} | {} | {}", i + 1, slot.slot_code, DateHelper::display_date(&slot.date), slot.time);
        }

        print!("\nSelect slot (1-{}): ", slots.len());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            return Ok(None);
        }

        let picked = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| slots.get(i))
            .map_or_else(|| input.to_string(), |slot| slot.slot_code.clone());
        Ok(Some(picked))
    }

    async fn leads_command(&self, command: LeadCommands) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;
        let mut leads = LeadListController::new();
        AnimatedLogger::track("📡 Loading leads", "Leads loaded", leads.load(&desk.client)).await?;

        match command {
            LeadCommands::List { search, export } => {
                leads.search(&search);
                TableLogger::print_leads(leads.filtered());
                println!("Showing {} of {} leads", leads.filtered().len(), leads.leads().len());

                if export {
                    let report = leads_report(leads.filtered(), leads.query());
                    desk.exporter().export("leads", &report, now())?;
                }
            }
            LeadCommands::Show { lead_id } => {
                TableLogger::print_lead(leads.find(&lead_id)?);
            }
            LeadCommands::Status { lead_id, status } => {
                let status = LeadStatus::from_str(&status)?;
                leads.change_status(&desk.client, &lead_id, status).await?;
            }
        }
        Ok(())
    }

    async fn transactions_command(
        &self,
        page: u32,
        kind: Option<TransactionType>,
        channel: Option<String>,
        status: Option<TransactionStatus>,
        search: &str,
        export: bool,
    ) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;
        let mut ledger = TransactionListController::new();
        ledger.set_filters(TransactionFilters { kind, channel, status });
        ledger.set_page(page);

        AnimatedLogger::track("📡 Loading transactions", "Transactions loaded", ledger.load(&desk.client)).await?;
        ledger.search(search);
        TableLogger::print_transactions(ledger.filtered(), ledger.page(), ledger.pages(), ledger.total());

        if export {
            let rows = AnimatedLogger::track(
                "📡 Fetching every page for export",
                "All pages fetched",
                ledger.fetch_all_for_export(&desk.client),
            )
            .await?;
            let report = transactions_report(&rows, ledger.filters(), ledger.query());
            desk.exporter().export("transactions", &report, now())?;
        }
        Ok(())
    }

    async fn appointments_command(&self, command: AppointmentCommands) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;

        match command {
            AppointmentCommands::List => {
                let mut appointments = Appointments::new();
                AnimatedLogger::track("📡 Loading your appointments", "Appointments loaded", appointments.load(&desk.client))
                    .await?;
                appointments.stats(now()).print_summary();
                TableLogger::print_sessions(appointments.sessions(), appointments.sessions(), now());
                Ok(())
            }
            AppointmentCommands::Slots { date } => {
                let date = Self::booking_date(date.as_deref())?;
                let slots = Appointments::available_slots(&desk.client, date).await;
                TableLogger::print_slots(&DateHelper::iso_date(date), &slots);
                Ok(())
            }
            AppointmentCommands::Book { date, slot, email } => {
                let mut appointments = Appointments::new();
                if email.is_none() {
                    appointments.load(&desk.client).await?;
                }

                let slot = match slot {
                    Some(slot) => Some(slot),
                    None => {
                        let date = Self::booking_date(date.as_deref())?;
                        let slots = Appointments::available_slots(&desk.client, date).await;
                        let free: Vec<Slot> = slots.into_iter().filter(Slot::is_free).collect();
                        if free.is_empty() {
                            log::warn!("📭 No free slots on {}", DateHelper::iso_date(date));
                            return Ok(());
                        }
                        Self::prompt_slot(&free)?
                    }
                };

                appointments.book(&desk.client, slot.as_deref(), email.as_deref()).await
            }
        }
    }

    fn booking_date(raw: Option<&str>) -> ArcdeskResult<NaiveDate> {
        match raw {
            None => Ok(today()),
            Some(raw) => DateHelper::parse_date(raw).ok_or_else(|| {
                ArcdeskError::validation_error("date", raw, "Unrecognized date", Some("Use YYYY-MM-DD"))
            }),
        }
    }

    async fn courses_command(&self, command: CourseCommands) -> ArcdeskResult<()> {
        let desk = Desk::connect()?;

        match command {
            CourseCommands::List => {
                let courses = AnimatedLogger::track("📡 Loading courses", "Courses loaded", CourseCatalog::list(&desk.client)).await?;
                TableLogger::print_courses(&courses);
            }
            CourseCommands::Show { course_id } => {
                let detail = CourseCatalog::show(&desk.client, &course_id).await?;
                TableLogger::print_course(&detail);
            }
        }
        Ok(())
    }
}
