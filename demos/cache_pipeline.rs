//! HTTP-cache style pipeline built on the engine.
//!
//! Requests enter at `receive` and are forwarded through lookup, fetch and
//! store steps until `deliver` produces the response. Run with
//! `RUST_LOG=relayline=debug` to watch every hop.

use relayline::{event_enum, BuildError, Context, Engine, EngineError, Event, Flow};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

event_enum! {
    enum Step {
        Receive as "receive",
        Pass as "pass",
        Lookup as "lookup",
        Hit as "hit",
        Miss as "miss",
        Fetch as "fetch",
        Store as "store",
        Deliver as "deliver",
    }
}

#[derive(Clone, Debug)]
struct Exchange {
    method: &'static str,
    path: &'static str,
    body: Option<String>,
    source: &'static str,
}

impl Exchange {
    fn get(path: &'static str) -> Self {
        Self {
            method: "GET",
            path,
            body: None,
            source: "none",
        }
    }

    fn post(path: &'static str) -> Self {
        Self {
            method: "POST",
            ..Self::get(path)
        }
    }
}

type Cache = Rc<RefCell<HashMap<&'static str, String>>>;

fn origin(
    cx: &mut Context<'_, Step, Exchange, String>,
    exchange: &Exchange,
) -> Result<Flow<Step, Exchange>, EngineError> {
    let body = format!("<h1>{}</h1>", exchange.path);
    let next = Exchange {
        body: Some(body),
        source: "origin",
        ..exchange.clone()
    };
    if exchange.method == "GET" {
        cx.forward(Step::Store, next)
    } else {
        cx.forward(Step::Deliver, next)
    }
}

fn build_engine(cache: Cache) -> Result<Engine<Step, Exchange, String>, BuildError> {
    let mut engine: Engine<Step, Exchange, String> = Engine::new();

    engine.on(Step::Receive, |cx, exchange| {
        if exchange.method == "GET" {
            cx.forward(Step::Lookup, exchange.clone())
        } else {
            cx.forward(Step::Pass, exchange.clone())
        }
    });
    engine.on(Step::Pass, |cx, exchange| cx.forward(Step::Fetch, exchange.clone()));

    let lookup_cache = Rc::clone(&cache);
    engine.on(Step::Lookup, move |cx, exchange| {
        match lookup_cache.borrow().get(exchange.path) {
            Some(body) => cx.forward(
                Step::Hit,
                Exchange {
                    body: Some(body.clone()),
                    source: "cache",
                    ..exchange.clone()
                },
            ),
            None => cx.forward(Step::Miss, exchange.clone()),
        }
    });
    engine.on(Step::Hit, |cx, exchange| cx.forward(Step::Deliver, exchange.clone()));
    engine.on(Step::Miss, |cx, exchange| cx.forward(Step::Fetch, exchange.clone()));
    engine.on(Step::Fetch, origin);

    let store_cache = Rc::clone(&cache);
    engine.on(Step::Store, move |cx, exchange| {
        if let Some(body) = &exchange.body {
            store_cache.borrow_mut().insert(exchange.path, body.clone());
        }
        cx.forward(Step::Deliver, exchange.clone())
    });

    engine.declare(Step::Deliver);
    engine.set_perform_hook(Step::Deliver, |exchange| {
        format!(
            "{} {} -> {} (from {})",
            exchange.method,
            exchange.path,
            exchange.body.as_deref().unwrap_or(""),
            exchange.source
        )
    })?;

    Ok(engine)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("relayline=info".parse()?))
        .init();

    let cache: Cache = Rc::new(RefCell::new(HashMap::new()));
    let mut engine = build_engine(Rc::clone(&cache))?;

    for exchange in [
        Exchange::get("/index.html"),
        Exchange::get("/index.html"),
        Exchange::post("/login"),
    ] {
        let outcome = engine.dispatch(Step::Receive, exchange)?;
        println!("{}", outcome.into_value().unwrap_or_default());
    }

    // only-if-cached: the request may be answered from cache and nothing else
    let cached_only = [Step::Lookup, Step::Hit, Step::Deliver];
    for path in ["/index.html", "/about.html"] {
        match engine.transition(Step::Receive, cached_only, Exchange::get(path)) {
            Ok(outcome) => println!("{}", outcome.into_value().unwrap_or_default()),
            Err(EngineError::IllegalTransition { from, to }) => {
                println!("GET {path} -> 504 Gateway Timeout ({from} tried {to})")
            }
            Err(err) => return Err(err.into()),
        }
    }

    let steps: Vec<&str> = engine.history().path().iter().map(|e| e.name()).collect();
    println!("steps: {}", steps.join(" -> "));
    println!("cached entries: {}", cache.borrow().len());

    Ok(())
}
