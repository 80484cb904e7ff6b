use crate::enums::lead_status::LeadStatus;
use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::structs::filtered_list::FilteredList;
use crate::structs::lead::Lead;
use crate::traits::backend::Backend;

#[derive(Debug, Default)]
pub struct LeadListController {
    list: FilteredList<Lead>,
    error: Option<String>,
}

impl LeadListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches every lead and reapplies the current search.
    pub async fn load(&mut self, backend: &dyn Backend) -> ArcdeskResult<()> {
        self.error = None;
        match backend.list_leads().await {
            Ok(leads) => {
                log::debug!("Loaded {} lead(s)", leads.len());
                self.list.set_items(leads);
                Ok(())
            }
            Err(e) => {
                let error = ArcdeskError::from_api("Failed to fetch leads", e.without_message());
                self.error = Some(error.banner());
                Err(error)
            }
        }
    }

    /// Filters by name, email, phone, status or message.
    pub fn search(&mut self, query: &str) -> &[Lead] {
        self.list.search(query)
    }

    /// All loaded leads.
    pub fn leads(&self) -> &[Lead] {
        self.list.items()
    }

    /// Leads matching the current search.
    pub fn filtered(&self) -> &[Lead] {
        self.list.filtered()
    }

    pub fn query(&self) -> &str {
        self.list.query()
    }

    /// Banner from the last failed load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Looks a lead up by id.
    pub fn find(&self, lead_id: &str) -> ArcdeskResult<&Lead> {
        self.list
            .items()
            .iter()
            .find(|lead| lead.id == lead_id)
            .ok_or_else(|| ArcdeskError::not_found("Lead", lead_id))
    }

    /// Pushes the new status to the backend, then mirrors it into both lists.
    /// Nothing changes locally if the call fails.
    pub async fn change_status(&mut self, backend: &dyn Backend, lead_id: &str, status: LeadStatus) -> ArcdeskResult<()> {
        self.find(lead_id)?;

        backend
            .update_lead_status(lead_id, status)
            .await
            .map_err(|e| ArcdeskError::from_api("Failed to update lead status", e))?;

        let updated = self.list.update_where(|lead| lead.id == lead_id, |lead| lead.status = Some(status));
        log::info!("✅ Lead {} marked as {} ({} row(s) updated)", lead_id, status.label(), updated);
        Ok(())
    }
}
