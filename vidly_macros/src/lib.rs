mod record;

use proc_macro::TokenStream;

/// Derive macro for catalog record types.
///
/// Generates the `vidly::Record` impl: the collection name and the id
/// accessor used as the storage key.
///
/// # Usage
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Clone, Record)]
/// #[record(collection = "watchlist")]
/// struct WatchlistEntry {
///     #[record(id)]
///     pub id: String,
///     pub movie_id: String,
/// }
/// ```
///
/// Defaults:
/// - collection: pluralized snake_case struct name (`WatchlistEntry` -> `watchlist_entries`)
/// - id field: the field named `id`
///
/// A missing id field or a non-struct input is a compile error.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
