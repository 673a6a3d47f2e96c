use dioxus::prelude::*;

use crate::app_assets::AppHead;
use crate::config::AppConfig;
use crate::pages::list::TaskList;
use crate::state::{AppState, TodoStore};
use crate::storage::{default_slot, PersistenceBridge};

#[component]
pub fn App() -> Element {
    // Startup is the only read of the persistence slot.
    let store = use_signal(|| {
        let config = AppConfig::from_env();
        TodoStore::open(PersistenceBridge::new(default_slot(&config)))
    });
    use_context_provider(|| AppState { store });

    rsx! {
        AppHead {}
        TaskList {}
    }
}
