// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamps in milliseconds, calendar dates
// as ISO 8601 text.

use anyhow::anyhow;

use tripbook_core::entities as e;

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a e::User> for NewUser<'a> {
    fn from(from: &'a e::User) -> Self {
        Self {
            id: from.id.as_str(),
            email: from.email.as_str(),
            name: &from.name,
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<UserEntity> for e::User {
    fn from(from: UserEntity) -> Self {
        Self {
            id: from.id.into(),
            email: e::EmailAddress::new_unchecked(from.email),
            name: from.name,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = trips)]
pub struct NewTrip<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub location: &'a str,
    pub start_date: String,
    pub end_date: Option<String>,
    pub share_token: &'a str,
    pub created_at: i64,
}

impl<'a> From<&'a e::Trip> for NewTrip<'a> {
    fn from(from: &'a e::Trip) -> Self {
        Self {
            id: from.id.as_str(),
            user_id: from.owner.as_str(),
            title: &from.title,
            description: from.description.as_deref(),
            location: &from.location,
            start_date: e::format_date(from.start_date),
            end_date: from.end_date.map(e::format_date),
            share_token: from.share_token.as_str(),
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct TripEntity {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub share_token: String,
    pub created_at: i64,
}

impl TryFrom<TripEntity> for e::Trip {
    type Error = anyhow::Error;

    fn try_from(from: TripEntity) -> Result<Self, Self::Error> {
        let start_date = e::parse_date(&from.start_date)
            .map_err(|_| anyhow!("Malformed start date: {}", from.start_date))?;
        let end_date = from
            .end_date
            .as_deref()
            .map(|date| e::parse_date(date).map_err(|_| anyhow!("Malformed end date: {date}")))
            .transpose()?;
        Ok(Self {
            id: from.id.into(),
            owner: from.user_id.into(),
            title: from.title,
            description: from.description,
            location: from.location,
            start_date,
            end_date,
            share_token: from.share_token.into(),
            created_at: e::Timestamp::from_millis(from.created_at),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = photos)]
pub struct NewPhoto<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub url: &'a str,
    pub caption: Option<&'a str>,
    pub taken_at: Option<i64>,
    pub sort_order: Option<i64>,
    pub created_at: i64,
}

impl<'a> From<&'a e::Photo> for NewPhoto<'a> {
    fn from(from: &'a e::Photo) -> Self {
        Self {
            id: from.id.as_str(),
            trip_id: from.trip_id.as_str(),
            url: &from.url,
            caption: from.caption.as_deref(),
            taken_at: from.taken_at.map(e::Timestamp::as_millis),
            sort_order: from.sort_order,
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct PhotoEntity {
    pub id: String,
    pub trip_id: String,
    pub url: String,
    pub caption: Option<String>,
    pub taken_at: Option<i64>,
    pub sort_order: Option<i64>,
    pub created_at: i64,
}

impl From<PhotoEntity> for e::Photo {
    fn from(from: PhotoEntity) -> Self {
        Self {
            id: from.id.into(),
            trip_id: from.trip_id.into(),
            url: from.url,
            caption: from.caption,
            taken_at: from.taken_at.map(e::Timestamp::from_millis),
            sort_order: from.sort_order,
            created_at: e::Timestamp::from_millis(from.created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = countries)]
pub struct NewCountry<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub code: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a e::Country> for NewCountry<'a> {
    fn from(from: &'a e::Country) -> Self {
        Self {
            id: from.id.as_str(),
            trip_id: from.trip_id.as_str(),
            code: from.code.as_str(),
            name: &from.name,
        }
    }
}

#[derive(Queryable)]
pub struct CountryEntity {
    pub id: String,
    pub trip_id: String,
    pub code: String,
    pub name: String,
}

impl TryFrom<CountryEntity> for e::Country {
    type Error = anyhow::Error;

    fn try_from(from: CountryEntity) -> Result<Self, Self::Error> {
        let code = from
            .code
            .parse::<e::CountryCode>()
            .map_err(|_| anyhow!("Malformed country code: {}", from.code))?;
        Ok(Self {
            id: from.id.into(),
            trip_id: from.trip_id.into(),
            code,
            name: from.name,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = notes)]
pub struct NewNote<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub kind: String,
    pub content: &'a str,
    pub date: i64,
}

impl<'a> From<&'a e::Note> for NewNote<'a> {
    fn from(from: &'a e::Note) -> Self {
        Self {
            id: from.id.as_str(),
            trip_id: from.trip_id.as_str(),
            kind: from.kind.to_string(),
            content: &from.content,
            date: from.date.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct NoteEntity {
    pub id: String,
    pub trip_id: String,
    pub kind: String,
    pub content: String,
    pub date: i64,
}

impl TryFrom<NoteEntity> for e::Note {
    type Error = anyhow::Error;

    fn try_from(from: NoteEntity) -> Result<Self, Self::Error> {
        let kind = from
            .kind
            .parse::<e::NoteKind>()
            .map_err(|_| anyhow!("Malformed note kind: {}", from.kind))?;
        Ok(Self {
            id: from.id.into(),
            trip_id: from.trip_id.into(),
            kind,
            content: from.content,
            date: e::Timestamp::from_millis(from.date),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = layouts)]
pub struct NewLayout<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub content: &'a str,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct LayoutEntity {
    pub id: String,
    pub trip_id: String,
    pub content: String,
    pub updated_at: i64,
}

impl TryFrom<LayoutEntity> for e::Layout {
    type Error = anyhow::Error;

    fn try_from(from: LayoutEntity) -> Result<Self, Self::Error> {
        let sections = serde_json::from_str(&from.content)
            .map_err(|err| anyhow!("Malformed layout document: {err}"))?;
        Ok(Self {
            id: from.id.into(),
            trip_id: from.trip_id.into(),
            sections,
            updated_at: e::Timestamp::from_millis(from.updated_at),
        })
    }
}
