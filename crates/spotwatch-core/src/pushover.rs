use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::{Result, SpotwatchError};

const SERVICE: &str = "Pushover";

/// Blocking client for the Pushover message endpoint. One POST per run at
/// most; the caller decides whether there is anything to send.
#[derive(Clone)]
pub struct PushoverClient {
    http: Client,
    url: String,
    token: String,
    user: String,
    sound: Option<String>,
}

impl std::fmt::Debug for PushoverClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushoverClient")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl PushoverClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            url: config.pushover_url.clone(),
            token: config.pushover_token.clone(),
            user: config.pushover_user.clone(),
            sound: config.pushover_sound.clone(),
        })
    }

    /// Deliver one message body as a form-encoded POST.
    pub fn send(&self, message: &str) -> Result<()> {
        let form = build_form(&self.token, &self.user, self.sound.as_deref(), message);
        let resp = self.http.post(&self.url).form(&form).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SpotwatchError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

fn build_form<'a>(
    token: &'a str,
    user: &'a str,
    sound: Option<&'a str>,
    message: &'a str,
) -> Vec<(&'static str, &'a str)> {
    let mut form = vec![("token", token), ("user", user)];
    if let Some(sound) = sound {
        form.push(("sound", sound));
    }
    form.push(("message", message));
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_carries_credentials_and_body() {
        let form = build_form("app-token", "user-key", None, "one\ntwo");
        assert_eq!(
            form,
            vec![
                ("token", "app-token"),
                ("user", "user-key"),
                ("message", "one\ntwo"),
            ]
        );
    }

    #[test]
    fn sound_selector_is_optional() {
        let form = build_form("t", "u", Some("gamelan"), "hi");
        assert!(form.contains(&("sound", "gamelan")));
    }
}
