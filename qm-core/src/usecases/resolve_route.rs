use super::prelude::*;
use qm_entities::route::{RouteRequest, Waypoint};

/// Validate an origin/destination pair and shape it for the
/// directions renderer.
///
/// No lookup happens here; rendering the route is up to the caller.
pub fn resolve_route(
    key: Option<&ApiKey>,
    origin: &str,
    destination: &str,
) -> Result<RouteRequest> {
    require_api_key(key)?;
    if origin.trim().is_empty() {
        return Err(Error::EmptyInput(InputField::Origin));
    }
    if destination.trim().is_empty() {
        return Err(Error::EmptyInput(InputField::Destination));
    }
    Ok(RouteRequest {
        origin: Waypoint::encode(origin),
        destination: Waypoint::encode(destination),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_key() -> ApiKey {
        "test-key".parse().unwrap()
    }

    #[test]
    fn name_the_missing_field() {
        let key = api_key();
        assert_eq!(
            Err(Error::EmptyInput(InputField::Destination)),
            resolve_route(Some(&key), "A", "")
        );
        assert_eq!(
            Err(Error::EmptyInput(InputField::Origin)),
            resolve_route(Some(&key), "", "B")
        );
        assert_eq!(
            Err(Error::EmptyInput(InputField::Origin)),
            resolve_route(Some(&key), "", "")
        );
        assert_eq!(
            Err(Error::EmptyInput(InputField::Origin)),
            resolve_route(Some(&key), "   ", "B")
        );
    }

    #[test]
    fn missing_api_key_short_circuits() {
        assert_eq!(Err(Error::MissingApiKey), resolve_route(None, "A", "B"));
    }

    #[test]
    fn both_fields_are_encoded_and_decode_back_exactly() {
        let route = resolve_route(Some(&api_key()), "29.76,-95.37", "Houston").unwrap();
        assert_eq!("29.76,-95.37", route.origin.decode());
        assert_eq!("Houston", route.destination.decode());
    }

    #[test]
    fn fields_are_trimmed_before_encoding() {
        let route = resolve_route(Some(&api_key()), " Houston ", " Austin\n").unwrap();
        assert_eq!("Houston", route.origin.decode());
        assert_eq!("Austin", route.destination.decode());
    }
}
