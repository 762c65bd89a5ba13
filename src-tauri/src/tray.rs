use tauri::{menu::MenuBuilder, tray::TrayIconBuilder, AppHandle, Manager};
use taskswitch_core::TrayItem;

use crate::state::AppState;

pub const TRAY_ID: &str = "main-tray";
const TOOLTIP: &str = "App Switcher";

pub fn setup_tray(app_handle: &AppHandle) -> tauri::Result<()> {
    let menu = TrayItem::ALL
        .into_iter()
        .fold(MenuBuilder::new(app_handle), |menu, item| {
            menu.text(item.id(), item.label())
        })
        .build()?;

    let tray_builder = if let Some(icon) = app_handle.default_window_icon().cloned() {
        TrayIconBuilder::with_id(TRAY_ID).icon(icon)
    } else {
        TrayIconBuilder::with_id(TRAY_ID)
    };

    tray_builder
        .menu(&menu)
        .tooltip(TOOLTIP)
        .on_menu_event(|app_handle, event| {
            let Some(item) = TrayItem::from_id(event.id().as_ref()) else {
                return;
            };
            match item.window() {
                Some(kind) => {
                    let state = app_handle.state::<AppState>();
                    if let Err(err) = state.with_controller(|controller| controller.show(kind)) {
                        log::warn!("tray {}: {err}", item.label());
                    }
                }
                None => app_handle.exit(0),
            }
        })
        .build(app_handle)?;

    Ok(())
}

pub fn remove_tray(app_handle: &AppHandle) {
    if app_handle.remove_tray_by_id(TRAY_ID).is_none() {
        log::debug!("tray {TRAY_ID} already gone");
    }
}
