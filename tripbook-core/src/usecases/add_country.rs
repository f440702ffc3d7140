use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewCountry {
    pub code: String,
    pub name: String,
}

pub fn add_country<R>(repo: &R, trip_id: &str, user_id: &str, new: NewCountry) -> Result<Country>
where
    R: TripRepo + CountryRepo,
{
    let code = new.code.parse::<CountryCode>()?;
    let name = new.name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::CountryName);
    }
    let trip = super::authorize_trip_owner(repo, trip_id, user_id)?;

    let country = Country {
        id: Id::new(),
        trip_id: trip.id,
        code,
        name,
    };
    repo.create_country(&country)?;
    Ok(country)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn add_country_validates_code_and_name() {
        let db = MockDb::default();
        db.seed_trip("t1", "alice");

        let invalid_code = NewCountry {
            code: "FRA".into(),
            name: "France".into(),
        };
        assert!(matches!(
            add_country(&db, "t1", "alice", invalid_code),
            Err(Error::CountryCode)
        ));

        let blank_name = NewCountry {
            code: "FR".into(),
            name: " ".into(),
        };
        assert!(matches!(
            add_country(&db, "t1", "alice", blank_name),
            Err(Error::CountryName)
        ));

        let valid = NewCountry {
            code: "fr".into(),
            name: "France".into(),
        };
        let country = add_country(&db, "t1", "alice", valid).unwrap();
        assert_eq!(country.code.as_str(), "FR");
    }
}
