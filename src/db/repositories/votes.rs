use chrono::NaiveDate;
use rusqlite::{params, Row};

use crate::date::encode_date;
use crate::db::{connection::Database, helpers::parse_date, models::VoteRecord};
use crate::Result;

fn row_to_vote(row: &Row) -> Result<VoteRecord> {
    let date: String = row.get("date")?;
    Ok(VoteRecord {
        date: parse_date(&date, "date")?,
        username: row.get("username")?,
        group: row.get("group_name")?,
        place: row.get("place")?,
        time: row.get("time")?,
    })
}

impl Database {
    /// Latest-submission-wins vote storage: delete every row for
    /// (date, username, group), then insert one row per selection, all in
    /// one transaction. An empty selection set clears the user's vote.
    pub async fn submit_votes(
        &self,
        date: NaiveDate,
        username: String,
        group: String,
        selections: Vec<(String, String)>,
    ) -> Result<()> {
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM votes
                 WHERE date = ?1 AND username = ?2 AND group_name = ?3",
                params![encode_date(date), username, group],
            )?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO votes (date, username, group_name, place, time)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )?;
                for (place, time) in &selections {
                    stmt.execute(params![encode_date(date), username, group, place, time])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await
    }

    /// All vote rows for (date, group), one row per user selection, no
    /// deduplication; aggregation is the display layer's job.
    pub async fn votes_for_day(
        &self,
        date: NaiveDate,
        group: String,
    ) -> Result<Vec<VoteRecord>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT date, username, group_name, place, time FROM votes
                 WHERE date = ?1 AND group_name = ?2
                 ORDER BY rowid ASC",
            )?;

            let mut rows = stmt.query(params![encode_date(date), group])?;
            let mut votes = Vec::new();
            while let Some(row) = rows.next()? {
                votes.push(row_to_vote(row)?);
            }

            Ok(votes)
        })
        .await
    }
}
