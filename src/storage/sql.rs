pub(crate) const CREATE_CONTACTS_TABLE: &str = "
        CREATE TABLE IF NOT EXISTS contacts(\
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        name TEXT NOT NULL, \
        phone TEXT NOT NULL, \
        email TEXT, \
        address TEXT, \
        blacklisted BOOLEAN NOT NULL DEFAULT FALSE\
        )
    ";
