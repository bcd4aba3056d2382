//! Donation, volunteer, and contact submissions.
//!
//! These forms only validate and acknowledge; nothing is stored.

mod router;

pub use router::outreach_router;

use serde::{Deserialize, Serialize};

use crate::listings::domain::non_blank;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutreachError {
    #[error("Please fill all fields.")]
    MissingFields(Vec<&'static str>),
    #[error("Name is required.")]
    MissingName,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolunteerForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement echoed back on the success page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Acknowledgement {
    Donation {
        name: String,
        amount: String,
    },
    Volunteer {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        skills: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        availability: Option<String>,
    },
    Contact {
        name: String,
        email: String,
        message: String,
    },
}

fn require<'a>(
    fields: &[(&'static str, Option<&'a str>)],
) -> Result<Vec<&'a str>, OutreachError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| non_blank(*value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(fields
            .iter()
            .filter_map(|(_, value)| non_blank(*value))
            .collect())
    } else {
        Err(OutreachError::MissingFields(missing))
    }
}

pub fn donate(form: DonationForm) -> Result<Acknowledgement, OutreachError> {
    let values = require(&[
        ("name", form.name.as_deref()),
        ("amount", form.amount.as_deref()),
    ])?;
    Ok(Acknowledgement::Donation {
        name: values[0].to_string(),
        amount: values[1].to_string(),
    })
}

pub fn volunteer(form: VolunteerForm) -> Result<Acknowledgement, OutreachError> {
    let name = non_blank(form.name.as_deref()).ok_or(OutreachError::MissingName)?;
    Ok(Acknowledgement::Volunteer {
        name: name.to_string(),
        skills: non_blank(form.skills.as_deref()).map(str::to_string),
        availability: non_blank(form.availability.as_deref()).map(str::to_string),
    })
}

pub fn contact(form: ContactForm) -> Result<Acknowledgement, OutreachError> {
    let values = require(&[
        ("name", form.name.as_deref()),
        ("email", form.email.as_deref()),
        ("message", form.message.as_deref()),
    ])?;
    Ok(Acknowledgement::Contact {
        name: values[0].to_string(),
        email: values[1].to_string(),
        message: values[2].to_string(),
    })
}
