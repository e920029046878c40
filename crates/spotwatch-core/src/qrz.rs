use std::collections::HashMap;
use std::time::Duration;

use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::{Result, SpotwatchError};

const SERVICE: &str = "QRZ";

pub const NOT_FOUND: &str = "Not Found";

/// Opaque QRZ session credential, acquired once per run and threaded into
/// every lookup. QRZ keeps it valid for roughly a day, but this client
/// never caches it across runs.
#[derive(Clone)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionKey(..)")
    }
}

/// Blocking client for the QRZ XML directory.
#[derive(Clone)]
pub struct QrzClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for QrzClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrzClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl QrzClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            base_url: config.qrz_url.clone(),
            username: config.qrz_username.clone(),
            password: config.qrz_password.clone(),
        })
    }

    /// One authenticated request for a session key. At most one call per
    /// run; the key is handed back to the caller rather than stored, so
    /// lookups cannot silently re-acquire it.
    pub fn acquire_session(&self) -> Result<SessionKey> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
            ])
            .header("Accept", "application/xml")
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SpotwatchError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }
        parse_session_key(&resp.text()?)
    }

    /// Resolve a station identifier to a display name. One call per
    /// occurrence; no memoization within a run.
    pub fn lookup_operator(&self, session: &SessionKey, callsign: &str) -> Result<String> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("s", session.as_str()), ("callsign", callsign)])
            .header("Accept", "application/xml")
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SpotwatchError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }
        resolve_operator_name(&resp.text()?)
    }
}

pub fn parse_session_key(body: &str) -> Result<SessionKey> {
    let fields = xml_text_fields(body, &["Key"])?;
    fields
        .get("Key")
        .filter(|value| !value.is_empty())
        .map(|value| SessionKey(value.clone()))
        .ok_or(SpotwatchError::MissingField {
            service: SERVICE,
            field: "Key",
        })
}

/// Name precedence per the QRZ XML contract: fname + name joined with one
/// space, else trustee (club and repeater licenses carry no personal
/// name), else the "Not Found" sentinel. Absent fields are simply not
/// present in the XML. An empty response body means no match at all and
/// resolves to the sentinel without parsing.
pub fn resolve_operator_name(body: &str) -> Result<String> {
    if body.trim().is_empty() {
        return Ok(NOT_FOUND.to_string());
    }
    let fields = xml_text_fields(body, &["fname", "name", "trustee"])?;
    let first = fields.get("fname").filter(|v| !v.is_empty());
    let last = fields.get("name").filter(|v| !v.is_empty());
    if let (Some(first), Some(last)) = (first, last) {
        return Ok(format!("{first} {last}"));
    }
    if let Some(trustee) = fields.get("trustee").filter(|v| !v.is_empty()) {
        return Ok(trustee.clone());
    }
    Ok(NOT_FOUND.to_string())
}

/// Collect text content for the wanted element names, matching on local
/// names so the `qrz:` namespace prefix never matters. First occurrence
/// wins.
fn xml_text_fields(body: &str, wanted: &[&str]) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(body);
    let mut fields = HashMap::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let local = e.local_name();
                let local = String::from_utf8_lossy(local.as_ref()).into_owned();
                if wanted.contains(&local.as_str()) {
                    current = Some(local);
                }
            }
            Ok(Event::End(_)) => {
                current = None;
            }
            Ok(Event::Text(ref e)) => {
                if let Some(name) = current.as_ref() {
                    let text = e.unescape().map_err(|err| SpotwatchError::Xml {
                        service: SERVICE,
                        message: err.to_string(),
                    })?;
                    let text = text.trim();
                    if !text.is_empty() && !fields.contains_key(name) {
                        fields.insert(name.clone(), text.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(SpotwatchError::Xml {
                    service: SERVICE,
                    message: err.to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION_BODY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<QRZDatabase version="1.34" xmlns="http://online.qrz.com">
  <Session>
    <Key>2331uf894c4bd29f3923f3bacf02c532d7bd9</Key>
    <Count>123</Count>
    <SubExp>Wed Jan 1 12:34:03 2027</SubExp>
  </Session>
</QRZDatabase>"#;

    #[test]
    fn session_key_is_extracted() {
        let key = parse_session_key(SESSION_BODY).expect("key");
        assert_eq!(key.as_str(), "2331uf894c4bd29f3923f3bacf02c532d7bd9");
    }

    #[test]
    fn missing_session_key_is_an_error() {
        let body = r#"<QRZDatabase xmlns="http://online.qrz.com">
  <Session><Error>Username/password incorrect</Error></Session>
</QRZDatabase>"#;
        let err = parse_session_key(body).expect_err("must fail");
        assert!(matches!(
            err,
            SpotwatchError::MissingField { field: "Key", .. }
        ));
    }

    #[test]
    fn malformed_xml_propagates() {
        let err =
            parse_session_key("<QRZDatabase><Session></Wrong></QRZDatabase>").expect_err("must fail");
        assert!(matches!(err, SpotwatchError::Xml { .. }));
    }

    #[test]
    fn full_name_joins_fname_and_name() {
        let body = r#"<QRZDatabase xmlns="http://online.qrz.com">
  <Callsign>
    <call>K1ABC</call>
    <fname>Jane</fname>
    <name>Doe</name>
  </Callsign>
</QRZDatabase>"#;
        assert_eq!(resolve_operator_name(body).expect("name"), "Jane Doe");
    }

    #[test]
    fn trustee_backs_up_missing_personal_name() {
        let body = r#"<QRZDatabase xmlns="http://online.qrz.com">
  <Callsign>
    <call>W4SPF</call>
    <trustee>ACME Radio Club</trustee>
  </Callsign>
</QRZDatabase>"#;
        assert_eq!(
            resolve_operator_name(body).expect("name"),
            "ACME Radio Club"
        );
    }

    #[test]
    fn partial_personal_name_falls_through_to_trustee() {
        let body = r#"<QRZDatabase xmlns="http://online.qrz.com">
  <Callsign>
    <name>Doe</name>
    <trustee>ACME Radio Club</trustee>
  </Callsign>
</QRZDatabase>"#;
        assert_eq!(
            resolve_operator_name(body).expect("name"),
            "ACME Radio Club"
        );
    }

    #[test]
    fn empty_body_resolves_to_sentinel_without_parsing() {
        assert_eq!(resolve_operator_name("").expect("name"), NOT_FOUND);
        assert_eq!(resolve_operator_name("  \n\t ").expect("name"), NOT_FOUND);
    }

    #[test]
    fn no_usable_fields_yields_sentinel() {
        let body = r#"<QRZDatabase xmlns="http://online.qrz.com">
  <Callsign><call>K1ABC</call></Callsign>
</QRZDatabase>"#;
        assert_eq!(resolve_operator_name(body).expect("name"), NOT_FOUND);
    }

    #[test]
    fn namespace_prefixes_are_ignored() {
        let body = r#"<qrz:QRZDatabase xmlns:qrz="http://online.qrz.com">
  <qrz:Callsign>
    <qrz:fname>Jane</qrz:fname>
    <qrz:name>Doe</qrz:name>
  </qrz:Callsign>
</qrz:QRZDatabase>"#;
        assert_eq!(resolve_operator_name(body).expect("name"), "Jane Doe");
    }
}
