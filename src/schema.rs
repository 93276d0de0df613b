diesel::table! {
    contacts (id) {
        id -> Integer,
        name -> Text,
        phone -> Text,
        email -> Nullable<Text>,
        address -> Nullable<Text>,
        blacklisted -> Bool,
    }
}
