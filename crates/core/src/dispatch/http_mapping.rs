//! Pure functions for mapping dispatch errors to HTTP status codes.

use super::DispatchError;

/// Maps a [`DispatchError`] to an HTTP status code.
///
/// - `InvalidRoute` -> 400 (Bad Request)
/// - `MissingUpdateId` -> 400 (Bad Request)
/// - `MissingDeleteId` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Backend` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use health_records_core::dispatch::{dispatch_error_to_status_code, DispatchError};
///
/// assert_eq!(dispatch_error_to_status_code(&DispatchError::NotFound), 404);
/// ```
pub fn dispatch_error_to_status_code(error: &DispatchError) -> u16 {
    match error {
        DispatchError::InvalidRoute => 400,
        DispatchError::MissingUpdateId => 400,
        DispatchError::MissingDeleteId => 400,
        DispatchError::NotFound => 404,
        DispatchError::Backend(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_route_maps_to_400() {
        assert_eq!(
            dispatch_error_to_status_code(&DispatchError::InvalidRoute),
            400
        );
    }

    #[test]
    fn test_missing_ids_map_to_400() {
        assert_eq!(
            dispatch_error_to_status_code(&DispatchError::MissingUpdateId),
            400
        );
        assert_eq!(
            dispatch_error_to_status_code(&DispatchError::MissingDeleteId),
            400
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(dispatch_error_to_status_code(&DispatchError::NotFound), 404);
    }

    #[test]
    fn test_backend_maps_to_500() {
        let error = DispatchError::Backend("Connection failed: refused".to_string());
        assert_eq!(dispatch_error_to_status_code(&error), 500);
    }
}
