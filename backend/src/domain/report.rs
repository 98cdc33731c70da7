//! PDF report model.
//!
//! The export does not recompute the split. The six strings the page displayed
//! come back as hidden form inputs, each one is parsed and formatted again so
//! the document shows exactly what the page showed, and anything unreadable
//! becomes `R$ 0,00`.

use chrono::{DateTime, TimeZone};
use shared::{ExportPdfRequest, FormattedShares, MonetaryAmount};
use tracing::warn;

use super::currency::CurrencyCodec;

/// Everything the PDF template needs
#[derive(Debug, Clone, PartialEq)]
pub struct BillReport {
    pub shares: FormattedShares,
    /// Generation time as `DD/MM/YYYY HH:MM`
    pub generated_at: String,
    /// Attachment filename derived from the generation time
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct ReportService {
    codec: CurrencyCodec,
}

impl ReportService {
    pub const FILENAME_PREFIX: &'static str = "Conta_de_Agua_e_Luz";

    pub fn new(codec: CurrencyCodec) -> Self {
        Self { codec }
    }

    /// Build the report from the echoed form fields
    pub fn build_report<Tz>(&self, request: &ExportPdfRequest, now: DateTime<Tz>) -> BillReport
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let shares = FormattedShares {
            luz_iara: self.echo("luz_iara", request.luz_iara.as_deref()),
            agua_iara: self.echo("agua_iara", request.agua_iara.as_deref()),
            total_iara: self.echo("total_iara", request.total_iara.as_deref()),
            luz_rodrigo: self.echo("luz_rodrigo", request.luz_rodrigo.as_deref()),
            agua_rodrigo: self.echo("agua_rodrigo", request.agua_rodrigo.as_deref()),
            total_rodrigo: self.echo("total_rodrigo", request.total_rodrigo.as_deref()),
        };

        BillReport {
            shares,
            generated_at: now.format("%d/%m/%Y %H:%M").to_string(),
            filename: Self::report_filename(&now),
        }
    }

    /// `Conta_de_Agua_e_Luz_YYYYMMDD_HHMM.pdf`
    pub fn report_filename<Tz>(now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "{}_{}.pdf",
            Self::FILENAME_PREFIX,
            now.format("%Y%m%d_%H%M")
        )
    }

    fn echo(&self, field: &str, value: Option<&str>) -> String {
        let Some(text) = value else {
            return self.codec.format(MonetaryAmount::zero());
        };
        match self.codec.parse(text) {
            Ok(amount) => self.codec.format(amount),
            Err(e) => {
                warn!("Export field {} replaced by zero: {}", field, e);
                self.codec.format(MonetaryAmount::zero())
            }
        }
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(CurrencyCodec::new())
    }
}
