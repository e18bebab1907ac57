/// Scenario table as written in a feature file.
///
/// Row 0 is the header (column labels as the scenario author wrote them); every following
/// row holds the raw textual cells for one record. Shape is not validated here, that is
/// done row by row when the table is mapped so earlier rows can still be inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds table data from any nested collection of string-like cells.
    ///
    /// # Example
    ///
    /// ```rust
    /// use entity_mapper::model::TableData;
    ///
    /// let table = TableData::from_rows([["Name", "Age"], ["Alice", "30"]]);
    /// assert_eq!(table.header(), ["Name", "Age"]);
    /// assert_eq!(table.data_rows().len(), 1);
    /// ```
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Header labels, or an empty slice for an empty table.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data rows following the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.data_rows().is_empty()
    }
}

impl From<Vec<Vec<String>>> for TableData {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}
