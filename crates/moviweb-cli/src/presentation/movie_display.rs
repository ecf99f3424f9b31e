//! Rendering of users, movies and suggestions as text tables.

use std::fmt::Write as _;

use moviweb_core::{Movie, User};

use super::tables::{format_optional, separator, truncate_string};

/// Render the user table.
pub fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users yet. Use 'moviweb users add <name>' to create one.".to_string();
    }

    let mut out = format!("{:<6} Name\n{}\n", "ID", separator(40));
    for user in users {
        let _ = writeln!(out, "{:<6} {}", user.id, truncate_string(&user.name, 33));
    }
    out
}

/// Render a user's movie table.
pub fn render_movies(user_id: i64, movies: &[Movie]) -> String {
    if movies.is_empty() {
        return format!("User {user_id} has no movies.");
    }

    let mut out = format!(
        "{:<6} {:<32} {:<6} {:<24} Genre\n{}\n",
        "ID",
        "Title",
        "Year",
        "Director",
        separator(100)
    );
    for movie in movies {
        let _ = writeln!(
            out,
            "{:<6} {:<32} {:<6} {:<24} {}",
            movie.id,
            truncate_string(&movie.title, 31),
            format_optional(movie.year.as_ref(), "--"),
            truncate_string(&movie.director, 23),
            truncate_string(&movie.genre, 28),
        );
    }
    out
}

/// Render every movie in the catalog with its owning user.
pub fn render_all_movies(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies yet. Use 'moviweb movies add <user-id> <title>' to add one.".to_string();
    }

    let mut out = format!(
        "{:<6} {:<6} {:<32} {:<6} Director\n{}\n",
        "ID",
        "User",
        "Title",
        "Year",
        separator(80)
    );
    for movie in movies {
        let _ = writeln!(
            out,
            "{:<6} {:<6} {:<32} {:<6} {}",
            movie.id,
            movie.user_id,
            truncate_string(&movie.title, 31),
            format_optional(movie.year.as_ref(), "--"),
            truncate_string(&movie.director, 28),
        );
    }
    out
}

/// Render one movie as a short summary block.
pub fn render_movie(heading: &str, movie: &Movie) -> String {
    let mut out = format!("{heading}\n");
    let _ = writeln!(out, "  ID:       {}", movie.id);
    let _ = writeln!(out, "  Title:    {}", movie.title);
    let _ = writeln!(out, "  Year:     {}", format_optional(movie.year.as_ref(), "--"));
    let _ = writeln!(out, "  Director: {}", movie.director);
    let _ = writeln!(out, "  Genre:    {}", movie.genre);
    if let Some(poster) = &movie.poster_url {
        let _ = writeln!(out, "  Poster:   {poster}");
    }
    out
}

/// Render a suggestion list.
pub fn render_suggestions(title: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return format!("No suggestions for '{title}'.");
    }

    let mut out = "Did you mean:\n".to_string();
    for suggestion in suggestions {
        let _ = writeln!(out, "  - {suggestion}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: 7,
            title: "Inception".to_string(),
            year: Some(2010),
            director: "Christopher Nolan".to_string(),
            genre: "Sci-Fi".to_string(),
            poster_url: None,
            user_id: 1,
        }
    }

    #[test]
    fn test_render_empty_lists() {
        assert!(render_users(&[]).contains("No users"));
        assert_eq!(render_movies(4, &[]), "User 4 has no movies.");
        assert_eq!(render_suggestions("x", &[]), "No suggestions for 'x'.");
    }

    #[test]
    fn test_render_movies_row() {
        let table = render_movies(1, &[movie()]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with("7 "));
        assert!(row.contains("Inception"));
        assert!(row.contains("2010"));
        assert!(row.contains("Christopher Nolan"));
    }

    #[test]
    fn test_render_all_movies_shows_owner() {
        assert!(render_all_movies(&[]).starts_with("No movies yet"));

        let table = render_all_movies(&[movie()]);
        let row = table.lines().nth(2).unwrap();
        let columns: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(&columns[..3], ["7", "1", "Inception"]);
    }

    #[test]
    fn test_render_movie_skips_missing_poster() {
        let block = render_movie("Added:", &movie());
        assert!(block.starts_with("Added:"));
        assert!(!block.contains("Poster"));
    }

    #[test]
    fn test_render_suggestions_keeps_order() {
        let text = render_suggestions("Heat", &["Heat".to_string(), "The Heat".to_string()]);
        let heat = text.find("- Heat").unwrap();
        let the_heat = text.find("- The Heat").unwrap();
        assert!(heat < the_heat);
    }
}
