// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! On-demand report export.
//!
//! The artifact is a JSON document over a date-filtered slice of bookings.
//! `export_mode` records how guest identities left the system: `obscured`
//! (masked filler, safe to share) or `revealed` (opened plaintext, for
//! guarded internal use). The warning text travels inside the artifact so
//! a reader downstream knows which one they are holding.

use crate::error::ApiError;
use room_desk_domain::{DateRange, Moment, Night, Period, Person, Statistics, aggregate};
use room_desk_privacy::{AtRestCodec, obscure_person};
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;
use tracing::warn;

/// Display date format used in the exported period label (`01/03/2024`).
const PERIOD_FORMAT: &[time::format_description::BorrowedFormatItem<'_>] =
    format_description!("[day]/[month]/[year]");

/// How guest identities were treated at export time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Identities replaced with masked filler.
    Obscured,
    /// Identities opened to plaintext.
    Revealed,
}

impl ExportMode {
    fn warning_text(self) -> String {
        match self {
            Self::Obscured => String::from(
                "Ce rapport contient des données masquées pour la protection de la vie privée.",
            ),
            Self::Revealed => String::from(
                "ATTENTION: Ce rapport contient des données personnelles décryptées. Manipuler avec précaution.",
            ),
        }
    }
}

/// The exported report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    /// The reporting period as a display label.
    pub period: String,
    /// How guest identities were treated.
    pub export_mode: ExportMode,
    /// The caution to show anyone opening this document.
    pub warning_text: String,
    /// Rollups over the exported slice.
    pub statistics: Statistics,
    /// The exported moments.
    pub moments: Vec<Moment>,
    /// The exported nights.
    pub nights: Vec<Night>,
}

impl ExportArtifact {
    /// Serializes the artifact to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string_pretty(self).map_err(|e| ApiError::Internal {
            message: e.to_string(),
        })
    }
}

/// Builds the export artifact for a period.
///
/// # Arguments
///
/// * `moments` - All moment bookings, filtered here by `date`
/// * `nights` - All night bookings, filtered here by `check_in_date`
/// * `period` - The reporting period to export
/// * `mode` - How to treat guest identities
/// * `codec` - The at-rest codec guest identities were sealed with
/// * `today` - The day the report is being built
///
/// # Errors
///
/// Returns an error if the period cannot be resolved or formatted.
pub fn build_export(
    moments: &[Moment],
    nights: &[Night],
    period: Period,
    mode: ExportMode,
    codec: &AtRestCodec,
    today: Date,
) -> Result<ExportArtifact, ApiError> {
    let range: DateRange = period
        .date_range(today)
        .map_err(|e| ApiError::Internal {
            message: e.to_string(),
        })?;

    let selected_moments: Vec<Moment> = moments
        .iter()
        .filter(|moment| range.contains(moment.date))
        .cloned()
        .collect();
    let selected_nights: Vec<Night> = nights
        .iter()
        .filter(|night| range.contains(night.check_in_date))
        .cloned()
        .collect();

    let statistics: Statistics = aggregate(&selected_moments, &selected_nights, &range);

    let moments: Vec<Moment> = selected_moments
        .into_iter()
        .map(|moment| Moment {
            person1: export_person(&moment.person1, mode, codec),
            person2: export_person(&moment.person2, mode, codec),
            ..moment
        })
        .collect();
    let nights: Vec<Night> = selected_nights
        .into_iter()
        .map(|night| Night {
            person1: export_person(&night.person1, mode, codec),
            person2: export_person(&night.person2, mode, codec),
            ..night
        })
        .collect();

    Ok(ExportArtifact {
        period: format_period(&range)?,
        export_mode: mode,
        warning_text: mode.warning_text(),
        statistics,
        moments,
        nights,
    })
}

fn format_period(range: &DateRange) -> Result<String, ApiError> {
    let start: String = range.start.format(PERIOD_FORMAT).map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })?;
    let end: String = range.end.format(PERIOD_FORMAT).map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })?;
    Ok(format!("{start} - {end}"))
}

/// Opens a sealed identity, then masks or keeps it per the export mode.
///
/// A value that fails to open (legacy blob, key rotation) is exported
/// as stored rather than failing the whole report.
fn export_person(person: &Person, mode: ExportMode, codec: &AtRestCodec) -> Person {
    let opened: Person = match codec.open_person(person) {
        Ok(opened) => opened,
        Err(err) => {
            warn!(error = %err, "Could not open a sealed identity for export");
            person.clone()
        }
    };
    match mode {
        ExportMode::Obscured => obscure_person(&opened),
        ExportMode::Revealed => opened,
    }
}
