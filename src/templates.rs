use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, tmdb::SearchMovie};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model], flash: Option<&str>) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Everything watched, ranked by rating." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if let Some(flash) = flash {
                        div class="mt-6 rounded-md border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-800" { (flash) }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Add one to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies.iter().rev() {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            @if let Some(img_url) = &movie.img_url {
                img class="h-36 w-24 flex-none rounded object-cover" src=(img_url) alt=(movie.title);
            }
            div class="min-w-0 flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(rank) = movie.ranking {
                            span class="mr-2 text-gray-400" { "#" (rank) }
                        }
                        (movie.title)
                        @if let Some(year) = movie.year {
                            span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                        }
                    }
                    @if let Some(rating) = movie.rating {
                        span class="flex-none rounded bg-yellow-100 px-2 py-1 text-sm font-semibold text-yellow-800" { (rating) "/10" }
                    }
                }
                p class="mt-2 text-sm text-gray-600 line-clamp-3" { (movie.description) }
                @if let Some(review) = &movie.review {
                    p class="mt-2 text-sm italic text-gray-700" { "“" (review) "”" }
                }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/update?id={}", movie.id)) { "Edit" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

pub fn add_page() -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Add Movie" }

                        form class="mt-6 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title" required;
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, results: &[SearchMovie]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-2xl font-bold text-gray-900" { "Select Movie" }
                    p class="mt-2 text-gray-600" { "Results for “" (query) "”" }

                    @if results.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No results. Try a different title." }
                            a class="mt-4 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                        }
                    } @else {
                        ul class="mt-8 space-y-3" {
                            @for result in results {
                                li class="bg-white shadow rounded-lg p-5" {
                                    a class="font-semibold text-blue-600 hover:text-blue-800" href=(find_url(result)) {
                                        (result.original_title)
                                        @if !result.release_date.is_empty() {
                                            span class="ml-2 font-normal text-gray-500" { "(" (result.release_date) ")" }
                                        }
                                    }
                                    @if !result.overview.is_empty() {
                                        p class="mt-2 text-sm text-gray-600 line-clamp-2" { (result.overview) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn find_url(result: &SearchMovie) -> String {
    format!("/find?id={}&title={}", result.id, urlencoding::encode(&result.original_title))
}

pub fn no_match_page(query: &str) -> String {
    page(
        "No Match",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "No matching movie" }
                        p class="mt-4 text-gray-700" { "The movie database returned no results for “" (query) "”." }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model) -> String {
    page(
        "Edit Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Edit " (movie.title) }

                        form class="mt-6 space-y-6" method="post" action=(format!("/update?id={}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your Rating Out Of 10 e.g. 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=[movie.rating];
                            }
                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your Review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=[movie.review.as_deref()];
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn not_found_page(message: String) -> String {
    page(
        "Not Found",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Not Found" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
