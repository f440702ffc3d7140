use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
pub mod sqlite;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db);
    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![
        ("/api", api::routes()),
        ("/share", api::share::routes()),
    ]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
