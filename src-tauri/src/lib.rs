mod commands;
mod hotkey;
mod logging;
mod notify;
mod state;
mod tray;
mod windows;

use commands::relay;
use log::{info, warn};
use state::{AppState, Controller};
use tauri::{AppHandle, Manager, RunEvent, Window, WindowEvent};
use taskswitch_core::WindowKind;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            with_controller(app_handle, |controller| controller.show(WindowKind::Main));
        }))
        .plugin(tauri_plugin_notification::init())
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(hotkey::on_shortcut)
                .build(),
        )
        .invoke_handler(tauri::generate_handler![relay])
        .on_window_event(on_window_event)
        .setup(|app| {
            logging::init();

            let handle = app.handle();
            app.manage(AppState::new(handle));

            let report = app
                .state::<AppState>()
                .with_controller(|controller| controller.start())?;
            for failed in &report.failed {
                warn!(
                    "global shortcut {} for {} is not active: {}",
                    failed.accelerator,
                    failed.target.label(),
                    failed.error
                );
            }

            tray::setup_tray(handle)?;
            info!("ready");
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let RunEvent::Exit = event {
            with_controller(app_handle, |controller| controller.shutdown());
            tray::remove_tray(app_handle);
        }
    });
}

/// Window events are handled off the event-loop callback. A window call made
/// under the controller lock may raise focus events synchronously, and those
/// must not contend for the lock they were raised under.
fn on_window_event(window: &Window, event: &WindowEvent) {
    let Some(kind) = WindowKind::from_label(window.label()) else {
        return;
    };

    let action: fn(&mut Controller, WindowKind) = match event {
        WindowEvent::Focused(false) => Controller::on_focus_lost,
        WindowEvent::Destroyed => Controller::on_destroyed,
        _ => return,
    };

    let app_handle = window.app_handle().clone();
    tauri::async_runtime::spawn(async move {
        with_controller(&app_handle, |controller| action(controller, kind));
    });
}

fn with_controller(app_handle: &AppHandle, f: impl FnOnce(&mut Controller)) {
    let Some(state) = app_handle.try_state::<AppState>() else {
        return;
    };
    if let Err(err) = state.with_controller(f) {
        warn!("{err}");
    }
}
