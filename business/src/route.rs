//! Route state for page navigation.

use std::any::Any;
use std::borrow::Cow;

use dining_states::State;

use crate::rows::RowKey;

/// The page currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    AdminUsers,
    MenuItems,
    CreateReview {
        item_id: RowKey,
        item_name: String,
    },
    MyReviews,
    ItemReviews {
        item_id: RowKey,
    },
}

/// `encodeURIComponent`: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::AdminUsers => "/admin/users".to_owned(),
            Self::MenuItems => "/menuitems".to_owned(),
            Self::CreateReview { item_id, item_name } => format!(
                "/myreviews/create?itemId={item_id}&itemName={}",
                encode_uri_component(item_name)
            ),
            Self::MyReviews => "/myreviews".to_owned(),
            Self::ItemReviews { item_id } => format!("/reviews/{item_id}"),
        }
    }

    /// Parses a path produced by [`Route::path`]. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let path = path.trim_end_matches('/');

        match path {
            "" => Some(Self::Home),
            "/admin/users" => Some(Self::AdminUsers),
            "/menuitems" => Some(Self::MenuItems),
            "/myreviews" => Some(Self::MyReviews),
            "/myreviews/create" => {
                let item_id = query_param(query, "itemId")?.parse::<i64>().ok()?;
                let item_name = query_param(query, "itemName").unwrap_or_default();
                Some(Self::CreateReview {
                    item_id: RowKey(item_id),
                    item_name: item_name.into_owned(),
                })
            }
            _ => {
                let id = path.strip_prefix("/reviews/")?.parse::<i64>().ok()?;
                Some(Self::ItemReviews {
                    item_id: RowKey(id),
                })
            }
        }
    }
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<Cow<'a, str>> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| urlencoding::decode(v).ok())
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
