use chrono::NaiveDate;
use rusqlite::{params, Row};

use crate::date::{encode_date, encode_time};
use crate::db::{
    connection::Database,
    helpers::{parse_date, parse_time},
    models::MessageRecord,
};
use crate::Result;

fn row_to_message(row: &Row) -> Result<MessageRecord> {
    let date: String = row.get("date")?;
    let time: String = row.get("time")?;
    Ok(MessageRecord {
        date: parse_date(&date, "date")?,
        time: parse_time(&time, "time")?,
        username: row.get("username")?,
        group: row.get("group_name")?,
        text: row.get("text")?,
    })
}

impl Database {
    /// Single append; no dedup, no length limit. Length limits are the
    /// caller's concern.
    pub async fn append_message(&self, record: MessageRecord) -> Result<()> {
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO messages (date, time, username, group_name, text)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    encode_date(record.date),
                    encode_time(record.time),
                    record.username,
                    record.group,
                    record.text,
                ],
            )?;
            Ok(())
        })
        .await
    }

    /// Messages for (date, group), newest first. rowid breaks ties between
    /// same-second messages so a fresh append always comes back on top.
    pub async fn messages_for_day(
        &self,
        date: NaiveDate,
        group: String,
    ) -> Result<Vec<MessageRecord>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT date, time, username, group_name, text FROM messages
                 WHERE date = ?1 AND group_name = ?2
                 ORDER BY time DESC, rowid DESC",
            )?;

            let mut rows = stmt.query(params![encode_date(date), group])?;
            let mut messages = Vec::new();
            while let Some(row) = rows.next()? {
                messages.push(row_to_message(row)?);
            }

            Ok(messages)
        })
        .await
    }
}
