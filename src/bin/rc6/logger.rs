// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Installs a stderr logger filtered by `RUST_LOG`, falling back to `default_level`.
pub fn init(default_level: LevelFilter) {
    let subscriber = tracing_subscriber::registry();
    let stderr_log = stderr_layer(default_level);
    subscriber.with(stderr_log).init();
}

fn stderr_layer<S>(default_level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    // stdout may carry cipher output
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    stderr_layer.with_filter(env_filter)
}
