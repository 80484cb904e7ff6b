use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppointmentStats {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    pub cancelled: usize,
}

impl AppointmentStats {
    pub fn print_summary(&self) {
        log::info!("📊 Appointments: {} total", self.total);
        log::info!("   ✅ Completed: {}", self.completed);
        log::info!("   📅 Upcoming:  {}", self.upcoming);
        log::info!("   ❌ Cancelled: {}", self.cancelled);
    }
}
