//! Reservation form and its hand-off to the messaging link.
//!
//! Nothing is written back to the booking backend. A submitted reservation
//! becomes a pre-filled chat message; availability changes only when the shop
//! updates the spreadsheet and the matrix is reloaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::date_math::{add_days, format_date, format_full_date, parse_date};

/// Guarantee documents the form offers as checkboxes
pub const DOCUMENT_CHOICES: [&str; 6] = [
    "KTP",
    "SIM",
    "KK",
    "NPWP",
    "Kartu Pelajar/Mahasiswa",
    "Paspor",
];

pub const PAST_DATE_MESSAGE: &str =
    "Tanggal yang dipilih sudah berlalu. Silakan pilih tanggal hari ini atau yang akan datang.";

/// Why a cell could not open the reservation form
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OpenError {
    #[error("{}", PAST_DATE_MESSAGE)]
    PastDate(String),
    #[error("Tanggal tidak valid: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Pilih minimal {required} dokumen jaminan ({selected} dipilih)")]
    InsufficientDocuments { selected: usize, required: usize },
}

impl ValidationError {
    /// Stable identifier for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InsufficientDocuments { .. } => "insufficient-documents",
        }
    }
}

/// Form contents between a cell click and submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    /// Raw unit name, as the shop knows it
    pub unit: String,
    pub date: String,
    pub pickup_time: String,
    pub return_date: String,
    pub return_time: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub documents: Vec<String>,
}

impl ReservationDraft {
    /// Fresh draft for an open cell: return the next day, default pick-up and
    /// return times, empty customer details.
    pub fn for_cell(
        unit: &str,
        date_str: &str,
        today: NaiveDate,
        config: &AppConfig,
    ) -> Result<Self, OpenError> {
        let date = parse_date(date_str).ok_or_else(|| OpenError::InvalidDate(date_str.to_string()))?;
        if date < today {
            return Err(OpenError::PastDate(date_str.to_string()));
        }

        Ok(Self {
            unit: unit.to_string(),
            date: format_date(date),
            pickup_time: config.default_pickup_time.clone(),
            return_date: format_date(add_days(date, 1)),
            return_time: config.default_return_time.clone(),
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            documents: Vec::new(),
        })
    }

    /// Check or uncheck a document, keeping the form's checkbox order
    pub fn toggle_document(&mut self, document: &str) {
        if let Some(pos) = self.documents.iter().position(|d| d == document) {
            self.documents.remove(pos);
        } else {
            self.documents.push(document.to_string());
            self.documents.sort_by_key(|d| {
                DOCUMENT_CHOICES
                    .iter()
                    .position(|choice| choice == d)
                    .unwrap_or(DOCUMENT_CHOICES.len())
            });
        }
    }

    pub fn validate(&self, config: &AppConfig) -> Result<(), ValidationError> {
        if self.documents.len() < config.required_documents {
            return Err(ValidationError::InsufficientDocuments {
                selected: self.documents.len(),
                required: config.required_documents,
            });
        }
        Ok(())
    }
}

/// Ready-to-open hand-off
#[derive(Debug, Clone, PartialEq)]
pub struct Handoff {
    pub message: String,
    pub link: String,
}

pub fn build_message(draft: &ReservationDraft) -> String {
    format!(
        "Halo, saya {name} ingin menyewa barang berikut:\n    \n\
         *Detail Penyewaan:*\n\
         Barang: {unit}\n\
         Tanggal Sewa: {date} jam {pickup_time}\n\
         Tanggal Kembali: {return_date} jam {return_time}\n\
         \n\
         *Data Diri:*\n\
         Nama: {name}\n\
         Telepon: {phone}\n\
         Alamat: {address}\n\
         \n\
         *Dokumen Jaminan:*\n\
         {documents}\n\
         \n\
         Mohon konfirmasi ketersediaannya. Terima kasih.",
        name = draft.name,
        unit = draft.unit,
        date = format_full_date(&draft.date),
        pickup_time = draft.pickup_time,
        return_date = format_full_date(&draft.return_date),
        return_time = draft.return_time,
        phone = draft.phone,
        address = draft.address,
        documents = draft.documents.join(", "),
    )
}

pub fn handoff_link(config: &AppConfig, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        config.handoff_base_url.trim_end_matches('/'),
        config.handoff_recipient,
        urlencoding::encode(message)
    )
}

/// Validate the draft and turn it into a hand-off link
pub fn submit(draft: &ReservationDraft, config: &AppConfig) -> Result<Handoff, ValidationError> {
    draft.validate(config)?;

    let message = build_message(draft);
    let link = handoff_link(config, &message);
    log::info!("📨 HANDOFF: Reservation for {} on {} ready", draft.unit, draft.date);

    Ok(Handoff { message, link })
}
