mod support;

mod api_client_tests;
mod report_tests;
mod reschedule_tests;
