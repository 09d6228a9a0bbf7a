use thiserror::Error;

/// Ошибки станции и её каналов.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StationError {
    /// Имя канала передано в конструктор станции более одного раза.
    /// Станция при этом не создаётся вовсе.
    #[error("duplicate channel name '{0}' passed to station constructor")]
    DuplicateChannel(String),

    /// Обращение к каналу, которого нет на станции. Набор каналов
    /// фиксируется при создании, канал не создаётся при первом обращении.
    #[error("channel '{0}' does not exist on this station")]
    NoSuchChannel(String),
}

/// Результат операций станции.
pub type StationResult<T> = Result<T, StationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_error_display() {
        assert_eq!(
            StationError::DuplicateChannel("news".into()).to_string(),
            "duplicate channel name 'news' passed to station constructor"
        );
        assert_eq!(
            StationError::NoSuchChannel("jobs".into()).to_string(),
            "channel 'jobs' does not exist on this station"
        );
    }

    #[test]
    fn test_station_error_eq() {
        assert_eq!(
            StationError::NoSuchChannel("a".into()),
            StationError::NoSuchChannel("a".into())
        );
        assert_ne!(
            StationError::NoSuchChannel("a".into()),
            StationError::DuplicateChannel("a".into())
        );
    }
}
