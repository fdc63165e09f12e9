//! Records present in a freshly started store.

use crate::{Image, User};

/// Returns the seed users, in insertion order.
pub fn users() -> Vec<User> {
    vec![
        User::with_id("1", "Domen", "d.lisjak@emakina.at"),
        User::with_id("2", "Sladi", "s.ristic@emakina.at"),
        User::with_id("3", "Anh Tu", "a.nguyen@emakina.at"),
    ]
}

/// Returns the seed images, in insertion order.
pub fn images() -> Vec<Image> {
    vec![
        Image::new("Demo image", "1", true).with_id("1").with_likes(1),
        Image::new("Don Giovanni", "3", true).with_id("2").with_likes(3),
        Image::new("NordSee photo", "2", true).with_id("3").with_likes(5),
    ]
}
