//! Serialization round trips for `dynarray`; see `tests/`.
