//! Seed posts shipped with a fresh database.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::Post;

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// The five sample posts, ids 1 through 5.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Introduction to C#".to_string(),
            content: "This post covers the basics of C# programming language...".to_string(),
            author: "John Doe".to_string(),
            created_date: day(2023, 1, 15),
            updated_date: None,
            published_date: Some(day(2023, 1, 20)),
            is_published: true,
        },
        Post {
            id: 2,
            title: "Understanding ASP.NET Core".to_string(),
            content: "ASP.NET Core is a free and open-source web framework...".to_string(),
            author: "Jane Smith".to_string(),
            created_date: day(2023, 2, 10),
            updated_date: Some(day(2023, 2, 12)),
            published_date: Some(day(2023, 2, 15)),
            is_published: true,
        },
        Post {
            id: 3,
            title: "Getting Started with Entity Framework Core".to_string(),
            content: "Entity Framework Core (EF Core) is a lightweight, extensible...".to_string(),
            author: "Emily Johnson".to_string(),
            created_date: day(2023, 3, 5),
            updated_date: None,
            published_date: None,
            is_published: false,
        },
        Post {
            id: 4,
            title: "Deploying ASP.NET Core Applications".to_string(),
            content: "This post explains how to deploy ASP.NET Core applications...".to_string(),
            author: "Michael Brown".to_string(),
            created_date: day(2023, 4, 1),
            updated_date: Some(day(2023, 4, 3)),
            published_date: Some(day(2023, 4, 5)),
            is_published: true,
        },
        Post {
            id: 5,
            title: "Advanced C# Programming Techniques".to_string(),
            content: "In this post, we explore some advanced C# programming techniques..."
                .to_string(),
            author: "Jessica White".to_string(),
            created_date: day(2023, 5, 20),
            updated_date: None,
            published_date: Some(day(2023, 5, 25)),
            is_published: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<i32> = seed_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seed_dates_are_set() {
        let first = &seed_posts()[0];
        assert_eq!(first.created_date.to_rfc3339(), "2023-01-15T00:00:00+00:00");
        assert!(first.updated_date.is_none());
    }
}
