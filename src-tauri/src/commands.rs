use tauri::State;
use taskswitch_core::{UiReply, UiRequest};

use crate::state::AppState;

/// Single entry point for every UI-to-main message. Unknown message names
/// are rejected while deserializing `request`.
#[tauri::command]
pub fn relay(request: UiRequest, state: State<'_, AppState>) -> Result<UiReply, String> {
    state.with_controller(|controller| controller.handle(request))
}
