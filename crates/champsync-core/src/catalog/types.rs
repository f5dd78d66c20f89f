//! Row types for the champion table.

/// Columns of the import CSV, in order. The header row must match these
/// names (case-insensitive); Postgres folds them to lowercase column names.
pub const CSV_COLUMNS: [&str; 9] = [
    "championName",
    "role",
    "genre",
    "espece",
    "ressource",
    "range",
    "regions",
    "releaseDate",
    "iconUrl",
];

/// Row returned by the listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionSummary {
    pub champion_name: String,
    pub role: Option<String>,
    pub regions: Option<String>,
    pub icon_url: Option<String>,
}

impl std::fmt::Display for ChampionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} | Role: {} | URL: {}",
            self.champion_name,
            self.role.as_deref().unwrap_or("-"),
            self.icon_url.as_deref().unwrap_or("-")
        )
    }
}

/// Full champion row, as returned by name lookup and random pick.
///
/// `release_date` is read as text (`YYYY-MM-DD`) so no date crate is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Champion {
    pub champion_name: String,
    pub role: Option<String>,
    pub genre: Option<String>,
    pub espece: Option<String>,
    pub ressource: Option<String>,
    pub range: Option<String>,
    pub regions: Option<String>,
    pub release_date: Option<String>,
    pub icon_url: Option<String>,
}

impl std::fmt::Display for Champion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        writeln!(f, "Name:     {}", self.champion_name)?;
        writeln!(f, "Role:     {}", show(&self.role))?;
        writeln!(f, "Genre:    {}", show(&self.genre))?;
        writeln!(f, "Species:  {}", show(&self.espece))?;
        writeln!(f, "Resource: {}", show(&self.ressource))?;
        writeln!(f, "Range:    {}", show(&self.range))?;
        writeln!(f, "Regions:  {}", show(&self.regions))?;
        writeln!(f, "Released: {}", show(&self.release_date))?;
        write!(f, "Icon:     {}", show(&self.icon_url))
    }
}

/// One column of the champion table as reported by `information_schema`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

/// What `Catalog::check` found in the database.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaReport {
    pub table_exists: bool,
    pub columns: Vec<ColumnInfo>,
    pub primary_key: Option<String>,
    pub row_count: i64,
}

impl SchemaReport {
    /// Names of `CSV_COLUMNS` (lowercased) that the table lacks.
    pub fn missing_columns(&self) -> Vec<String> {
        CSV_COLUMNS
            .iter()
            .map(|c| c.to_ascii_lowercase())
            .filter(|want| !self.columns.iter().any(|col| &col.name == want))
            .collect()
    }
}

impl std::fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.table_exists {
            return write!(
                f,
                "Champion table does not exist; run `champsync setup`."
            );
        }
        writeln!(f, "Champion table exists.")?;
        writeln!(f, "Columns:")?;
        for col in &self.columns {
            writeln!(
                f,
                "  {:<14} {:<24} {}",
                col.name,
                col.data_type,
                if col.nullable { "NULL" } else { "NOT NULL" }
            )?;
        }
        match &self.primary_key {
            Some(pk) => writeln!(f, "Primary key: {pk}")?,
            None => writeln!(f, "No primary key found.")?,
        }
        let missing = self.missing_columns();
        if !missing.is_empty() {
            writeln!(f, "Missing columns: {}", missing.join(", "))?;
        }
        write!(f, "Rows: {}", self.row_count)
    }
}
