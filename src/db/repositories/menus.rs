use chrono::NaiveDate;
use rusqlite::{params, Row};

use crate::date::encode_date;
use crate::db::{connection::Database, helpers::parse_date, models::MenuRecord};
use crate::Result;

fn row_to_menu(row: &Row) -> Result<MenuRecord> {
    let date: String = row.get("date")?;
    Ok(MenuRecord {
        date: parse_date(&date, "date")?,
        category: row.get("category")?,
        item: row.get("item")?,
    })
}

impl Database {
    /// Replace the entire menu table with `records` in one transaction.
    /// A refresh is a full snapshot swap; readers never see a half-deleted
    /// or half-inserted state.
    pub async fn replace_menus(&self, records: Vec<MenuRecord>) -> Result<()> {
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM menus", [])?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO menus (date, category, item) VALUES (?1, ?2, ?3)",
                )?;
                for record in &records {
                    stmt.execute(params![
                        encode_date(record.date),
                        record.category,
                        record.item,
                    ])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await
    }

    /// Menu rows for one day, grouped by category. Categories appear in
    /// first-seen insertion order and rows keep insertion order within
    /// their category.
    pub async fn menus_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<(String, Vec<MenuRecord>)>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT date, category, item FROM menus
                 WHERE date = ?1
                 ORDER BY rowid ASC",
            )?;

            let mut rows = stmt.query(params![encode_date(date)])?;
            let mut groups: Vec<(String, Vec<MenuRecord>)> = Vec::new();
            while let Some(row) = rows.next()? {
                let record = row_to_menu(row)?;
                match groups
                    .iter_mut()
                    .find(|(category, _)| *category == record.category)
                {
                    Some((_, records)) => records.push(record),
                    None => groups.push((record.category.clone(), vec![record])),
                }
            }

            Ok(groups)
        })
        .await
    }
}
