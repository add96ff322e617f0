//! Favorite Toggle - Per-visit Detail View Workflow
//!
//! Pessimistic toggle: the displayed favorite flag only flips once the
//! repository has confirmed the write. A failed write keeps showing the
//! previously confirmed state and can be retried by toggling again.
//!
//! `begin`/`settle` expose the transient `Persisting` state to callers
//! that do not hold the toggle across the await; `toggle` runs both.

use tracing::{info, instrument, warn};

use crate::domain::favorite::FavoriteItem;
use crate::ports::local_store::LocalStore;
use crate::usecases::favorites_repository::{FavoritesError, FavoritesRepository};

/// Label shown when the item is not a favorite.
pub const ADD_LABEL: &str = "Add to Favorites";
/// Label shown when the item is a favorite.
pub const REMOVE_LABEL: &str = "Remove from Favorites";

/// State of one item's favorite flag during a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleState {
  /// Not loaded yet.
  Unknown,
  /// Confirmed not favorited.
  NotFavorite,
  /// Confirmed favorited.
  Favorite,
  /// A write is in flight.
  Persisting {
    /// Confirmed state before the write.
    was_favorite: bool,
  },
  /// Last operation failed.
  Error {
    /// Last confirmed state, if one was ever observed.
    confirmed: Option<bool>,
    /// Failure description for a transient notice.
    message: String,
  },
}

/// Write the toggle is about to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
  Add,
  Remove,
}

/// Favorite toggle for one item.
#[derive(Debug, Clone)]
pub struct FavoriteToggle {
  item: FavoriteItem,
  state: ToggleState,
}

impl FavoriteToggle {
  /// Create a toggle in the `Unknown` state.
  pub fn new(item: FavoriteItem) -> Self {
    Self {
      item,
      state: ToggleState::Unknown,
    }
  }

  pub fn item(&self) -> &FavoriteItem {
    &self.item
  }

  pub fn state(&self) -> &ToggleState {
    &self.state
  }

  /// Last confirmed favorite flag.
  pub fn confirmed(&self) -> Option<bool> {
    match &self.state {
      ToggleState::Unknown => None,
      ToggleState::NotFavorite => Some(false),
      ToggleState::Favorite => Some(true),
      ToggleState::Persisting { was_favorite } => Some(*was_favorite),
      ToggleState::Error { confirmed, .. } => *confirmed,
    }
  }

  /// Flag to display; unknown reads as not favorited.
  pub fn displayed_favorite(&self) -> bool {
    self.confirmed().unwrap_or(false)
  }

  /// Button label for the displayed state.
  pub fn action_label(&self) -> &'static str {
    if self.displayed_favorite() {
      REMOVE_LABEL
    } else {
      ADD_LABEL
    }
  }

  /// Load the collection and settle on the item's confirmed state.
  #[instrument(skip(self, repo), fields(id = %self.item.id))]
  pub async fn activate<S: LocalStore + ?Sized>(
    &mut self,
    repo: &FavoritesRepository<S>,
  ) -> Result<bool, FavoritesError> {
    match repo.load().await {
      Ok(collection) => {
        let favorite = collection.contains(&self.item.id);
        self.state = confirmed_state(favorite);
        Ok(favorite)
      }
      Err(e) => {
        warn!(error = %e, "Failed to load favorite state");
        self.state = ToggleState::Error {
          confirmed: self.confirmed(),
          message: e.to_string(),
        };
        Err(e)
      }
    }
  }

  /// Enter `Persisting` and return the write to perform.
  ///
  /// `None` when there is no confirmed state to toggle from, or when a
  /// write is already in flight.
  pub fn begin(&mut self) -> Option<ToggleAction> {
    if matches!(self.state, ToggleState::Persisting { .. }) {
      return None;
    }
    let was_favorite = self.confirmed()?;
    self.state = ToggleState::Persisting { was_favorite };
    Some(if was_favorite {
      ToggleAction::Remove
    } else {
      ToggleAction::Add
    })
  }

  /// Leave `Persisting` with the outcome of the write.
  pub fn settle(&mut self, result: Result<bool, &FavoritesError>) {
    let ToggleState::Persisting { was_favorite } = self.state else {
      return;
    };
    self.state = match result {
      Ok(favorite) => confirmed_state(favorite),
      Err(e) => ToggleState::Error {
        confirmed: Some(was_favorite),
        message: e.to_string(),
      },
    };
  }

  /// Flip the favorite flag through the repository.
  ///
  /// Activates first when no state has been confirmed yet. Returns the
  /// new confirmed flag.
  #[instrument(skip(self, repo), fields(id = %self.item.id))]
  pub async fn toggle<S: LocalStore + ?Sized>(
    &mut self,
    repo: &FavoritesRepository<S>,
  ) -> Result<bool, FavoritesError> {
    if self.confirmed().is_none() {
      self.activate(repo).await?;
    }
    let Some(action) = self.begin() else {
      return Ok(self.displayed_favorite());
    };

    let result = match action {
      ToggleAction::Add => repo.add(self.item.clone()).await,
      ToggleAction::Remove => repo.remove(&self.item.id).await,
    }
    .map(|collection| collection.contains(&self.item.id));

    self.settle(result.as_ref().map(|f| *f));
    match &result {
      Ok(favorite) => info!(favorite, "Favorite toggled"),
      Err(e) => warn!(error = %e, "Favorite toggle failed, keeping prior state"),
    }
    result
  }
}

fn confirmed_state(favorite: bool) -> ToggleState {
  if favorite {
    ToggleState::Favorite
  } else {
    ToggleState::NotFavorite
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::adapters::persistence::MemoryStore;
  use crate::ports::local_store::StoreError;

  fn webtoon() -> FavoriteItem {
    FavoriteItem::new("1", "Sample Webtoon", "https://example.com/s.jpg", "d")
  }

  #[tokio::test]
  async fn test_activate_then_toggle_twice() {
    let repo = FavoritesRepository::new(Arc::new(MemoryStore::new()), "favorites");
    let mut toggle = FavoriteToggle::new(webtoon());
    assert_eq!(toggle.state(), &ToggleState::Unknown);
    assert_eq!(toggle.action_label(), ADD_LABEL);

    assert!(!toggle.activate(&repo).await.unwrap());
    assert_eq!(toggle.state(), &ToggleState::NotFavorite);

    assert!(toggle.toggle(&repo).await.unwrap());
    assert_eq!(toggle.state(), &ToggleState::Favorite);
    assert_eq!(toggle.action_label(), REMOVE_LABEL);

    assert!(!toggle.toggle(&repo).await.unwrap());
    assert!(repo.load().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_toggle_from_unknown_activates_first() {
    let seeded = r#"[{"id":"1","title":"t","image":"","description":""}]"#;
    let repo = FavoritesRepository::new(
      Arc::new(MemoryStore::with_value("favorites", seeded)),
      "favorites",
    );
    let mut toggle = FavoriteToggle::new(webtoon());

    assert!(!toggle.toggle(&repo).await.unwrap());
    assert_eq!(toggle.state(), &ToggleState::NotFavorite);
  }

  #[test]
  fn test_begin_requires_confirmed_state() {
    let mut toggle = FavoriteToggle::new(webtoon());
    assert_eq!(toggle.begin(), None);
    assert_eq!(toggle.state(), &ToggleState::Unknown);
  }

  #[test]
  fn test_persisting_keeps_prior_display_and_blocks_second_begin() {
    let mut toggle = FavoriteToggle::new(webtoon());
    toggle.state = ToggleState::NotFavorite;

    assert_eq!(toggle.begin(), Some(ToggleAction::Add));
    assert_eq!(
      toggle.state(),
      &ToggleState::Persisting {
        was_favorite: false
      }
    );
    assert!(!toggle.displayed_favorite());
    assert_eq!(toggle.begin(), None);

    toggle.settle(Ok(true));
    assert_eq!(toggle.state(), &ToggleState::Favorite);
  }

  #[test]
  fn test_failed_write_retains_confirmed_state() {
    let mut toggle = FavoriteToggle::new(webtoon());
    toggle.state = ToggleState::Favorite;
    assert_eq!(toggle.begin(), Some(ToggleAction::Remove));

    let err = FavoritesError::StorageUnavailable {
      key: "favorites".to_string(),
      source: StoreError::Unavailable("disk full".to_string()),
    };
    toggle.settle(Err(&err));

    assert!(matches!(
      toggle.state(),
      ToggleState::Error {
        confirmed: Some(true),
        ..
      }
    ));
    assert!(toggle.displayed_favorite());
    assert_eq!(toggle.action_label(), REMOVE_LABEL);
    // Retry from the error state
    assert_eq!(toggle.begin(), Some(ToggleAction::Remove));
  }

  #[test]
  fn test_settle_outside_persisting_is_ignored() {
    let mut toggle = FavoriteToggle::new(webtoon());
    toggle.settle(Ok(true));
    assert_eq!(toggle.state(), &ToggleState::Unknown);
  }
}
