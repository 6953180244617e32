//! The in-memory movie store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::movie::{Movie, MovieUpdate};

/// In-memory movie store keyed by movie id.
///
/// Thread-safe via `RwLock`. Every operation takes the lock exactly once,
/// so each request observes and applies a single atomic mutation; a
/// rejected request never leaves the store partially updated.
///
/// Enumeration order is not part of the contract and may vary.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    movies: RwLock<HashMap<String, Movie>>,
}

impl MovieCatalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new movie.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] if a movie with the same id is
    /// already stored.
    pub fn insert(&self, movie: Movie) -> Result<Movie> {
        let mut movies = self.write()?;
        if movies.contains_key(&movie.id) {
            return Err(Error::already_exists(movie.id));
        }
        movies.insert(movie.id.clone(), movie.clone());
        tracing::debug!(id = %movie.id, "movie stored");
        Ok(movie)
    }

    /// Returns a copy of the movie with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no movie with the id is stored.
    pub fn get(&self, id: &str) -> Result<Movie> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Returns true when a movie with the given id is stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if the store lock is poisoned.
    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.read()?.contains_key(id))
    }

    /// Applies a partial update to the movie with the given id and returns
    /// the merged record. `id` and `ratings` are never altered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no movie with the id is stored.
    pub fn update(&self, id: &str, update: MovieUpdate) -> Result<Movie> {
        let mut movies = self.write()?;
        let movie = movies.get_mut(id).ok_or_else(|| Error::not_found(id))?;
        if let Some(title) = update.title {
            movie.title = title;
        }
        if let Some(director) = update.director {
            movie.director = director;
        }
        if let Some(release_year) = update.release_year {
            movie.release_year = release_year;
        }
        if let Some(genre) = update.genre {
            movie.genre = genre;
        }
        Ok(movie.clone())
    }

    /// Removes the movie with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no movie with the id is stored.
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut movies = self.write()?;
        movies
            .remove(id)
            .map(|_| tracing::debug!(id = %id, "movie removed"))
            .ok_or_else(|| Error::not_found(id))
    }

    /// Appends a rating to the movie's sequence and returns the updated
    /// record. Ratings only grow; no operation removes individual ratings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no movie with the id is stored.
    pub fn add_rating(&self, id: &str, rating: u8) -> Result<Movie> {
        let mut movies = self.write()?;
        let movie = movies.get_mut(id).ok_or_else(|| Error::not_found(id))?;
        movie.ratings.push(rating);
        Ok(movie.clone())
    }

    /// Returns a copy of every stored movie, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if the store lock is poisoned.
    pub fn all(&self) -> Result<Vec<Movie>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Movie>>> {
        self.movies.read().map_err(|_| Error::Internal {
            message: "movie store lock poisoned".into(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Movie>>> {
        self.movies.write().map_err(|_| Error::Internal {
            message: "movie store lock poisoned".into(),
        })
    }
}
