/// Open the hand-off link in a new tab
pub fn open_handoff(link: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    window
        .open_with_url_and_target(link, "_blank")
        .map(|_| ())
        .map_err(|e| format!("Failed to open messaging link: {:?}", e))
}
