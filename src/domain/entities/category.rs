//! Category entity: the kind of input a lookup starts from.

use crate::error::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of identifying input. Each category selects its own template set and
/// placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    EmailAddress,
    Username,
    Domain,
    IpAddress,
    PhoneNumber,
    Image,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 6] = [
        Category::EmailAddress,
        Category::Username,
        Category::Domain,
        Category::IpAddress,
        Category::PhoneNumber,
        Category::Image,
    ];

    /// Human readable name, as offered in menus.
    pub fn label(self) -> &'static str {
        match self {
            Category::EmailAddress => "Email Address",
            Category::Username => "Username",
            Category::Domain => "Domain",
            Category::IpAddress => "IP Address",
            Category::PhoneNumber => "Phone Number",
            Category::Image => "Image",
        }
    }

    /// Token replaced by the user's value in this category's templates.
    pub fn placeholder(self) -> &'static str {
        match self {
            Category::EmailAddress => "$email",
            Category::Username => "$username",
            Category::Domain => "$domain",
            Category::IpAddress => "$ip",
            Category::PhoneNumber => "$phone",
            Category::Image => "$image",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Category::EmailAddress => "email",
            Category::Username => "user",
            Category::Domain => "domain",
            Category::IpAddress => "ip",
            Category::PhoneNumber => "phone",
            Category::Image => "image",
        }
    }

    fn variant_name(self) -> &'static str {
        match self {
            Category::EmailAddress => "emailaddress",
            Category::Username => "username",
            Category::Domain => "domain",
            Category::IpAddress => "ipaddress",
            Category::PhoneNumber => "phonenumber",
            Category::Image => "image",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a category from its label (`"IP Address"`), a kebab or snake form
/// (`ip-address`), the variant name (`IpAddress`) or a short alias (`ip`).
/// Matching is case-insensitive.
///
/// # Errors
///
/// Returns [`AppError::UnknownCategory`] for anything else.
impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        Category::ALL
            .into_iter()
            .find(|c| c.variant_name() == needle || c.alias() == needle)
            .ok_or_else(|| AppError::unknown_category(s))
    }
}
