use crate::model::{MonthCalendar, Roster};
use anyhow::{anyhow, Context};
use chrono::{Local, NaiveDateTime};
use rust_xlsxwriter::{Format, FormatBorder, Workbook};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Couleurs de remplissage par semaine (bleu, saumon, vert, jaune, violet).
pub const WEEK_COLORS: [u32; 5] = [0xADD8E6, 0xFA8072, 0x90EE90, 0xFFD700, 0x9370DB];

pub const DAY_FORMAT: &str = "%d/%m/%Y";

pub trait Exporter {
    /// Persiste l'escala et retourne le chemin du fichier produit.
    fn export(&self, roster: &Roster, calendar: &MonthCalendar) -> anyhow::Result<PathBuf>;
}

/// `$HOME/Documentos/home_presencial`
pub fn default_output_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join("Documentos").join("home_presencial"))
}

/// Nom horodaté du classeur.
pub fn file_name_for(timestamp: NaiveDateTime) -> String {
    format!("escala_trabalho_{}.xlsx", timestamp.format("%Y-%m-%d_%H-%M-%S"))
}

/// Export XLSX : une ligne par jour ouvré, une couleur par semaine, première ligne figée.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    dir: PathBuf,
    timestamp: Option<NaiveDateTime>,
}

impl XlsxExporter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            timestamp: None,
        }
    }

    pub fn with_default_dir() -> anyhow::Result<Self> {
        Ok(Self::new(default_output_dir()?))
    }

    /// Fige l'horodatage du nom de fichier (sinon : heure locale à l'export).
    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Rend le classeur en mémoire.
    pub fn render_to_bytes(
        &self,
        roster: &Roster,
        calendar: &MonthCalendar,
    ) -> anyhow::Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Escala").map_err(xlsx_err)?;

        let header = Format::new().set_bold().set_border(FormatBorder::Thin);
        let plain = Format::new().set_border(FormatBorder::Thin);
        let week_formats: Vec<Format> = WEEK_COLORS
            .iter()
            .map(|color| {
                Format::new()
                    .set_background_color(*color)
                    .set_border(FormatBorder::Thin)
            })
            .collect();

        sheet
            .write_with_format(0, 0, "Dia", &header)
            .map_err(xlsx_err)?;
        sheet.set_column_width(0, 12).map_err(xlsx_err)?;
        for (col, employee) in roster.employees().iter().enumerate() {
            let col = col as u16 + 1;
            sheet
                .write_with_format(0, col, employee.name.as_str(), &header)
                .map_err(xlsx_err)?;
            sheet
                .set_column_width(col, employee.name.chars().count().max(10) as f64 + 2.0)
                .map_err(xlsx_err)?;
        }

        for (idx, day) in roster.days().iter().enumerate() {
            // Au-delà de la 5e semaine : pas de couleur.
            let format = calendar
                .week_of(idx)
                .and_then(|week| week_formats.get(week))
                .unwrap_or(&plain);
            let row = idx as u32 + 1;
            sheet
                .write_with_format(row, 0, day.format(DAY_FORMAT).to_string(), format)
                .map_err(xlsx_err)?;
            for (col, mode) in roster.row(idx).iter().enumerate() {
                sheet
                    .write_with_format(row, col as u16 + 1, mode.label(), format)
                    .map_err(xlsx_err)?;
            }
        }

        sheet.set_freeze_panes(1, 0).map_err(xlsx_err)?;

        workbook.save_to_buffer().map_err(xlsx_err)
    }
}

impl Exporter for XlsxExporter {
    fn export(&self, roster: &Roster, calendar: &MonthCalendar) -> anyhow::Result<PathBuf> {
        let bytes = self.render_to_bytes(roster, calendar)?;

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating output directory {}", self.dir.display()))?;
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local());
        let path = self.dir.join(file_name_for(timestamp));

        let mut tmp = NamedTempFile::new_in(&self.dir).with_context(|| "creating temp file")?;
        tmp.write_all(&bytes).with_context(|| "writing temp file")?;
        tmp.flush().with_context(|| "flushing temp file")?;
        tmp.as_file().sync_all().with_context(|| "syncing temp file")?;
        tmp.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("atomic rename to {}", path.display()))?;

        tracing::info!(path = %path.display(), rows = roster.day_count(), "roster exported");
        Ok(path)
    }
}

fn xlsx_err(err: rust_xlsxwriter::XlsxError) -> anyhow::Error {
    anyhow!("failed to build workbook: {err}")
}
