//! Service facade over the scraper, normalizer and stores. This is the
//! whole inbound surface: the UI layer (or the CLI driver) only ever talks
//! to `LunchService`.

use chrono::NaiveDate;
use log::{info, warn};
use tokio::task::JoinSet;

use crate::config::Place;
use crate::date;
use crate::db::models::{MenuRecord, MessageRecord, VoteRecord};
use crate::db::Database;
use crate::normalize::normalize_menu;
use crate::scrape::{is_supported_source, MenuScraper};
use crate::{Error, Result};

/// Outcome of one bulk menu refresh. Sources that failed to fetch or parse
/// are reported by name and simply absent from the stored snapshot.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub fetched: Vec<String>,
    pub failed: Vec<String>,
}

impl RefreshReport {
    /// Number of menus stored by the refresh.
    pub fn stored(&self) -> usize {
        self.fetched.len()
    }
}

pub struct LunchService {
    db: Database,
    scraper: MenuScraper,
}

impl LunchService {
    pub fn new(db: Database, scraper: MenuScraper) -> Self {
        Self { db, scraper }
    }

    /// Fetch every supported place concurrently, normalize, and replace the
    /// stored snapshot for `date` in one transaction. A failing source
    /// never aborts the others; last-writer-wins between overlapping
    /// refreshes.
    pub async fn refresh_menus(&self, date: NaiveDate, places: &[Place]) -> Result<RefreshReport> {
        let mut tasks = JoinSet::new();
        for (index, place) in places.iter().enumerate() {
            if !is_supported_source(&place.url) {
                info!("skipping {}: unsupported menu source {}", place.name, place.url);
                continue;
            }
            let scraper = self.scraper.clone();
            let place = place.clone();
            tasks.spawn(async move {
                let result = scraper.fetch_fragments(&place.url).await;
                (index, place.name, result)
            });
        }

        let mut outcomes = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => warn!("menu fetch task failed: {err}"),
            }
        }
        // restore configuration order regardless of completion order
        outcomes.sort_by_key(|(index, _, _)| *index);

        let mut report = RefreshReport::default();
        let mut records = Vec::new();
        for (_, name, result) in outcomes {
            match result {
                Ok(fragments) => {
                    let lines = normalize_menu(&name, &fragments);
                    // position 0 is the place name; the rest are item rows
                    if let Some((category, items)) = lines.split_first() {
                        for item in items {
                            records.push(MenuRecord {
                                date,
                                category: category.clone(),
                                item: item.clone(),
                            });
                        }
                    }
                    report.fetched.push(name);
                }
                Err(err) => {
                    warn!("skipping menu for {name}: {err}");
                    report.failed.push(name);
                }
            }
        }

        self.db.replace_menus(records).await?;
        Ok(report)
    }

    /// Replace the user's vote for the day with the cartesian product of
    /// the selected places and times. Selecting only one of the two is
    /// rejected before any storage access; selecting neither clears the
    /// vote.
    pub async fn submit_vote(
        &self,
        date: NaiveDate,
        username: &str,
        group: &str,
        places: &[String],
        times: &[String],
    ) -> Result<()> {
        if places.is_empty() != times.is_empty() {
            return Err(Error::Validation(
                "select both a place and a time, or leave both empty".into(),
            ));
        }

        let selections: Vec<(String, String)> = places
            .iter()
            .flat_map(|place| times.iter().map(move |time| (place.clone(), time.clone())))
            .collect();

        self.db
            .submit_votes(date, username.to_string(), group.to_string(), selections)
            .await
    }

    /// Append one chat message stamped with the current local time.
    pub async fn post_message(
        &self,
        date: NaiveDate,
        username: &str,
        group: &str,
        text: &str,
    ) -> Result<()> {
        self.db
            .append_message(MessageRecord {
                date,
                time: date::now_time(),
                username: username.to_string(),
                group: group.to_string(),
                text: text.to_string(),
            })
            .await
    }

    pub async fn votes_for_display(
        &self,
        date: NaiveDate,
        group: &str,
    ) -> Result<Vec<VoteRecord>> {
        self.db.votes_for_day(date, group.to_string()).await
    }

    pub async fn messages_for_display(
        &self,
        date: NaiveDate,
        group: &str,
    ) -> Result<Vec<MessageRecord>> {
        self.db.messages_for_day(date, group.to_string()).await
    }

    pub async fn menus_for_display(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<(String, Vec<MenuRecord>)>> {
        self.db.menus_for_date(date).await
    }
}
