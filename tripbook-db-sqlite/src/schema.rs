table! {
    users (id) {
        id -> Text,
        email -> Text,
        name -> Text,
    }
}

table! {
    trips (id) {
        id -> Text,
        user_id -> Text,
        title -> Text,
        description -> Nullable<Text>,
        location -> Text,
        start_date -> Text,
        end_date -> Nullable<Text>,
        share_token -> Text,
        created_at -> BigInt,
    }
}

joinable!(trips -> users (user_id));

table! {
    photos (id) {
        id -> Text,
        trip_id -> Text,
        url -> Text,
        caption -> Nullable<Text>,
        taken_at -> Nullable<BigInt>,
        sort_order -> Nullable<BigInt>,
        created_at -> BigInt,
    }
}

joinable!(photos -> trips (trip_id));

table! {
    countries (id) {
        id -> Text,
        trip_id -> Text,
        code -> Text,
        name -> Text,
    }
}

joinable!(countries -> trips (trip_id));

table! {
    notes (id) {
        id -> Text,
        trip_id -> Text,
        kind -> Text,
        content -> Text,
        date -> BigInt,
    }
}

joinable!(notes -> trips (trip_id));

table! {
    layouts (id) {
        id -> Text,
        trip_id -> Text,
        content -> Text,
        updated_at -> BigInt,
    }
}

joinable!(layouts -> trips (trip_id));
