use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::models::MessageEvent;
use crate::services::directory::VehicleDirectory;
use crate::services::notify::NotificationSink;
use crate::services::registry::BookingRegistry;
use crate::services::reports::ReportBook;
use crate::services::submit::BookingSubmitter;
use crate::services::wizard::BookingWizard;

pub struct AppState {
    pub config: AppConfig,
    pub directory: Box<dyn VehicleDirectory>,
    pub notifier: Box<dyn NotificationSink>,
    pub submitter: Box<dyn BookingSubmitter>,
    pub registry: Mutex<BookingRegistry>,
    pub reports: Mutex<ReportBook>,
    /// Active booking wizards, one per customer session.
    pub wizards: Mutex<HashMap<String, BookingWizard>>,
    pub inbox_tx: broadcast::Sender<MessageEvent>,
}
