/// Base origin of the waitlist API.
///
/// Override at build time: `KARIBU_API_URL=http://localhost:3000 trunk serve`.
pub fn get_api_url() -> String {
    option_env!("KARIBU_API_URL")
        .unwrap_or("https://api.joinkaribu.com")
        .to_string()
}
