use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BOOK_CALL_PATH: &str = "/book";
pub const BOOKING_EMBED_URL: &str =
    "https://calendly.com/growthlayerstudio/30min?embed_domain=growthlayerstudio.in&embed_type=Inline";
/// Calendly needs scripts, its own origin, popups and forms; nothing else.
pub const BOOKING_FRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-popups allow-forms";
pub const BOOKING_DIRECT_URL: &str = "https://calendly.com/growthlayerstudio/30min";

pub const WHATSAPP_LINK: &str = "https://wa.me/7011530281";
pub const INSTAGRAM_LINK: &str = "https://www.instagram.com/growthlayer.studio";
pub const LINKEDIN_LINK: &str = "https://linkedin.com";

/// What to do with a submission whose honeypot field was filled in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoneypotPolicy {
    /// Never contact the sink; the visitor still sees the success notice.
    #[default]
    Suppress,
    /// Send it anyway with the `company` value attached and let the sheet filter it.
    Forward,
}

impl HoneypotPolicy {
    /// `forward` opts in to forwarding; anything else keeps the default.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("forward") => HoneypotPolicy::Forward,
            _ => HoneypotPolicy::Suppress,
        }
    }
}

/// How long a settled notification stays up before closing on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissDelays {
    pub success_ms: u32,
    pub error_ms: u32,
}

impl Default for DismissDelays {
    fn default() -> Self {
        Self {
            success_ms: 1_800,
            error_ms: 3_200,
        }
    }
}

/// Lead-capture sink settings. Built once at startup and handed to the
/// submission flow; nothing below reads the environment on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct SinkConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub page: String,
    pub honeypot: HoneypotPolicy,
    pub request_timeout_ms: u32,
    pub dismiss: DismissDelays,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            page: "contact".to_string(),
            honeypot: HoneypotPolicy::default(),
            request_timeout_ms: 10_000,
            dismiss: DismissDelays::default(),
        }
    }
}

impl SinkConfig {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: non_blank(endpoint.into()),
            token: non_blank(token.into()),
            ..Self::default()
        }
    }

    /// Reads `GSHEET_WEBAPP_URL`, `GSHEET_TOKEN` and `GSHEET_HONEYPOT` as they
    /// were when the bundle was compiled.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("GSHEET_WEBAPP_URL").unwrap_or_default(),
            option_env!("GSHEET_TOKEN").unwrap_or_default(),
        )
        .with_honeypot(HoneypotPolicy::from_setting(option_env!("GSHEET_HONEYPOT")))
    }

    pub fn with_honeypot(mut self, policy: HoneypotPolicy) -> Self {
        self.honeypot = policy;
        self
    }

    /// Endpoint and token, or the name of the first missing variable.
    pub fn credentials(&self) -> Result<(&str, &str), &'static str> {
        let endpoint = self.endpoint.as_deref().ok_or("GSHEET_WEBAPP_URL")?;
        let token = self.token.as_deref().ok_or("GSHEET_TOKEN")?;
        Ok((endpoint, token))
    }
}

fn non_blank(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
