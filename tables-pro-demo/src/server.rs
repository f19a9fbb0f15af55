//! In-process stand-in for the server rendering the movie table.

use tables_pro::{CellId, FetchRequest, Fragment, Method, Outcome, PageConfig, Response};
use tabledom::{Document, Element};

pub const LOCATION: &str = "http://localhost/movies/";
pub const BREAKPOINTS: &str = r#"{"breakpoints": [480, 768, 1024]}"#;

#[derive(Debug, Clone)]
struct Movie {
    id: usize,
    title: String,
    year: u16,
}

/// Renders the page and answers fragment requests against a small list.
pub struct MovieServer {
    movies: Vec<Movie>,
    config: PageConfig,
}

impl MovieServer {
    pub fn new(config: PageConfig) -> Self {
        let titles = [
            ("Alien", 1979),
            ("Blade Runner", 1982),
            ("Brazil", 1985),
            ("Aliens", 1986),
            ("RoboCop", 1987),
            ("Akira", 1988),
            ("Total Recall", 1990),
            ("Gattaca", 1997),
        ];
        let movies = titles
            .iter()
            .enumerate()
            .map(|(id, (title, year))| Movie {
                id,
                title: title.to_string(),
                year: *year,
            })
            .collect();
        Self { movies, config }
    }

    /// The initial page: toolbar, filters and an empty results region
    /// waiting for the width-specific layout.
    pub fn page(&self, width: u32) -> Document {
        let mut breakpoints = Element::new("script").id(self.config.breakpoints_id.as_str());
        breakpoints.set_text(BREAKPOINTS);

        let mut year_group = Element::div().id("group_year").children([
            Element::new("label").child(Element::text("Year from")),
            Element::input("year", "").id("id_year"),
        ]);
        for class in &self.config.filter_group_classes {
            year_group.add_class(class);
        }

        Document::new([
            Element::form().id(self.config.filter_form_id.as_str()).children([
                Element::select("per_page", "25")
                    .id("id_per_page")
                    .class(self.config.auto_submit_class.as_str()),
                year_group,
            ]),
            Element::div().id("toolbar").children([
                Element::checkbox("select_all_page").id(self.config.select_all_page_id.as_str()),
                Element::div()
                    .id("select_all_container")
                    .hidden(true)
                    .child(Element::checkbox("select_all").id(self.config.select_all_id.as_str())),
                Element::span().id(self.config.count_id.as_str()),
                Element::new("button")
                    .id(self.config.action_menu_id.as_str())
                    .disabled(true),
            ]),
            Element::div().id(self.config.results_id.as_str()),
            breakpoints,
        ])
        .with_location(LOCATION)
        .with_outer_width(width)
    }

    pub fn respond(&mut self, request: FetchRequest) -> Response {
        log::info!("[server] {} '{}' for #{}", request.method, request.url, request.target);

        if request.target == self.config.media_query_id {
            let table = self.table(None);
            let results = self.config.results_id.clone();
            return Response::swap(request, Fragment::Elements(vec![table])).retarget(results);
        }
        if request.target == self.config.results_id {
            let year = request
                .values
                .iter()
                .find(|(k, _)| k == "year")
                .and_then(|(_, v)| v.parse().ok());
            let table = self.table(year);
            return Response::swap(request, Fragment::Elements(vec![table]));
        }
        if request.method == Method::Put {
            return self.save(request);
        }
        if let Some(cell) = CellId::parse(&request.target, &self.config.cell_prefix) {
            let title = cell
                .row
                .parse::<usize>()
                .ok()
                .and_then(|id| self.movies.get(id))
                .map(|movie| movie.title.clone())
                .unwrap_or_default();
            let editor = Element::input("title", title)
                .id("id_title")
                .class(self.config.editing_class.as_str());
            return Response::swap(request, Fragment::Elements(vec![editor]));
        }

        Response::swap(request, Fragment::Html(String::new()))
    }

    fn save(&mut self, request: FetchRequest) -> Response {
        let id = self
            .config
            .row_key(&request.target)
            .and_then(|key| key.parse::<usize>().ok());
        let title = request
            .values
            .iter()
            .find(|(k, _)| k == "title")
            .map(|(_, v)| v.clone());
        if let (Some(movie), Some(title)) = (id.and_then(|id| self.movies.get_mut(id)), title) {
            log::info!("[server] movie {} renamed to '{title}'", movie.id);
            movie.title = title;
        }
        Response {
            request,
            retarget: None,
            outcome: Outcome::Trigger {
                url: LOCATION.to_string(),
            },
        }
    }

    fn table(&self, year_from: Option<u16>) -> Element {
        let rows = self
            .movies
            .iter()
            .filter(|movie| year_from.is_none_or(|year| movie.year >= year))
            .map(|movie| self.row(movie));
        Element::table()
            .id("movies")
            .child(Element::tbody().children(rows))
    }

    fn row(&self, movie: &Movie) -> Element {
        let id = movie.id;
        Element::tr()
            .id(format!("{}{id}", self.config.row_prefix))
            .children([
                Element::td().child(
                    Element::checkbox(self.config.checkbox_name.as_str())
                        .id(format!("cb_{id}"))
                        .class(self.config.checkbox_class.as_str())
                        .value(id.to_string()),
                ),
                Element::td()
                    .id(format!("title_{id}"))
                    .class(self.config.editable_class.as_str())
                    .child(Element::text(movie.title.as_str())),
                Element::td().child(Element::text(movie.year.to_string())),
            ])
    }
}
