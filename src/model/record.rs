use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub index: usize,
    pub manager: String,
    pub season: Option<i32>,
    pub position: Option<String>,
    pub player_name: Option<String>,
    pub player_cost: Option<f64>,
    pub points: f64,
}

impl Record {
    pub fn new(index: usize, manager: impl Into<String>, points: f64) -> Self {
        Self {
            index,
            manager: manager.into(),
            season: None,
            position: None,
            player_name: None,
            player_cost: None,
            points,
        }
    }

    pub fn with_season(mut self, season: i32) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_player(mut self, name: impl Into<String>, cost: f64) -> Self {
        self.player_name = Some(name.into());
        self.player_cost = Some(cost);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupBy {
    #[default]
    Manager,
    ManagerSeason,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeasonFilter {
    #[default]
    All,
    Only(BTreeSet<i32>),
}

impl SeasonFilter {
    pub fn only(seasons: impl IntoIterator<Item = i32>) -> Self {
        SeasonFilter::Only(seasons.into_iter().collect())
    }

    pub fn needs_season(&self) -> bool {
        matches!(self, SeasonFilter::Only(_))
    }

    pub fn admits(&self, season: Option<i32>) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Only(set) => season.is_some_and(|s| set.contains(&s)),
        }
    }
}
