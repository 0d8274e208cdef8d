//! Input validation gate.
//!
//! Every public operation validates its inputs in full before any network
//! activity. Validation is all-or-nothing for the call: the first violation
//! found aborts with an [`Error::Validation`] naming the offending field
//! path. This is deliberately asymmetric with the per-item failure handling
//! further down the pipeline, which only covers remote/network errors.

use serde_json::Value;

use crate::{Error, Result};

pub fn non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(field, "must be a non-empty string"));
    }
    Ok(())
}

/// Check every id in a normalized sequence. The field path of a violation
/// carries the offending index (e.g. `ids[2]`).
pub fn each_non_empty(field: &str, ids: &[String]) -> Result<()> {
    for (i, id) in ids.iter().enumerate() {
        if id.is_empty() {
            return Err(Error::validation(
                format!("{field}[{i}]"),
                "must be a non-empty string",
            ));
        }
    }
    Ok(())
}

/// Rules for a scheduling-page create/update body.
///
/// Key-set semantics: unknown keys are rejected, known keys are type-checked,
/// and a present `config` object is validated recursively.
pub fn scheduling_page_rules(params: &Value) -> Result<()> {
    let object = expect_object("params", params)?;

    for (key, value) in object {
        match key.as_str() {
            "access_tokens" => expect_string_array("access_tokens", value)?,
            "name" => expect_non_empty_string("name", value)?,
            "slug" => expect_non_empty_string("slug", value)?,
            "config" => config_rules(value)?,
            other => {
                return Err(Error::validation(
                    format!("params.{other}"),
                    "unknown key",
                ))
            }
        }
    }

    Ok(())
}

fn config_rules(config: &Value) -> Result<()> {
    let object = expect_object("config", config)?;

    for (key, value) in object {
        let path = format!("config.{key}");
        match key.as_str() {
            "appearance" => appearance_rules(value)?,
            // Free-form sections owned by the remote API surface.
            "booking" | "calendar_ids" | "event" | "expire_after" | "reminders" => {}
            "disable_emails" => expect_bool(&path, value)?,
            "locale" | "locale_for_guests" | "timezone" => expect_non_empty_string(&path, value)?,
            _ => return Err(Error::validation(path, "unknown key")),
        }
    }

    if !object.contains_key("timezone") {
        return Err(Error::validation("config.timezone", "is required"));
    }

    Ok(())
}

fn appearance_rules(appearance: &Value) -> Result<()> {
    let object = expect_object("config.appearance", appearance)?;

    for (key, value) in object {
        let path = format!("config.appearance.{key}");
        match key.as_str() {
            "color" | "company_name" | "logo" | "privacy_policy_redirect" | "submit_text"
            | "thank_you_redirect" | "thank_you_text" | "thank_you_text_secondary" => {
                expect_non_empty_string(&path, value)?
            }
            "show_autoschedule" | "show_branding" | "show_timezone_options" | "show_week_view" => {
                expect_bool(&path, value)?
            }
            _ => return Err(Error::validation(path, "unknown key")),
        }
    }

    if !object.contains_key("show_branding") {
        return Err(Error::validation("config.appearance.show_branding", "is required"));
    }

    Ok(())
}

fn expect_object<'a>(field: &str, value: &'a Value) -> Result<&'a serde_json::Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::validation(field, "must be an object"))
}

fn expect_non_empty_string(field: &str, value: &Value) -> Result<()> {
    match value.as_str() {
        Some(s) if !s.is_empty() => Ok(()),
        Some(_) => Err(Error::validation(field, "must be a non-empty string")),
        None => Err(Error::validation(field, "must be a string")),
    }
}

fn expect_bool(field: &str, value: &Value) -> Result<()> {
    if value.is_boolean() {
        Ok(())
    } else {
        Err(Error::validation(field, "must be a boolean"))
    }
}

fn expect_string_array(field: &str, value: &Value) -> Result<()> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::validation(field, "must be an array of strings"))?;
    for (i, item) in items.iter().enumerate() {
        expect_non_empty_string(&format!("{field}[{i}]"), item)?;
    }
    Ok(())
}
