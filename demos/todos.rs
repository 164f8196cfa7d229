//! This example derives views from an immutable application state. Updating
//! one part of the state allocates a new root but shares every untouched
//! subtree, so selectors over the untouched parts don't recompute.

use std::rc::Rc;

use reselect::create_selector;

#[derive(Debug)]
struct Todo {
    title: &'static str,
    done: bool,
}

struct State {
    todos: Rc<Vec<Todo>>,
    filter: Filter,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Filter {
    All,
    Open,
}

impl reselect::Shallow for Filter {
    fn shallow_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl State {
    fn with_filter(&self, filter: Filter) -> Rc<Self> {
        Rc::new(Self { todos: Rc::clone(&self.todos), filter })
    }

    fn with_todo(&self, title: &'static str) -> Rc<Self> {
        let mut todos: Vec<Todo> = self
            .todos
            .iter()
            .map(|todo| Todo { title: todo.title, done: todo.done })
            .collect();
        todos.push(Todo { title, done: false });
        Rc::new(Self { todos: Rc::new(todos), filter: self.filter })
    }
}

fn main() {
    let open_count = create_selector!(
        |s: &Rc<State>| Rc::clone(&s.todos),
        |todos: Rc<Vec<Todo>>| {
            println!("counting open todos");
            todos.iter().filter(|todo| !todo.done).count()
        },
    );

    let visible = create_selector!(
        |s: &Rc<State>| Rc::clone(&s.todos),
        |s: &Rc<State>| s.filter,
        |todos: Rc<Vec<Todo>>, filter: Filter| {
            println!("filtering todos");
            let titles: Vec<_> = todos
                .iter()
                .filter(|todo| filter == Filter::All || !todo.done)
                .map(|todo| todo.title)
                .collect();
            Rc::new(titles)
        },
    );

    let state = Rc::new(State {
        todos: Rc::new(vec![
            Todo { title: "write docs", done: true },
            Todo { title: "cut release", done: false },
        ]),
        filter: Filter::All,
    });

    println!("{} open, showing {:?}", open_count.select(&state), visible.select(&state));

    // Only the filter changed: the count is served from the inner cache.
    let state = state.with_filter(Filter::Open);
    println!("{} open, showing {:?}", open_count.select(&state), visible.select(&state));

    let state = state.with_todo("announce");
    println!("{} open, showing {:?}", open_count.select(&state), visible.select(&state));

    println!(
        "recomputations: count {}, visible {}",
        open_count.recomputations(),
        visible.recomputations(),
    );
}
