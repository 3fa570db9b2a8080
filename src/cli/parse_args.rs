use otter_fol::config::Config;

/// Parses CLI arguments into a [Config], overriding its defaults.
///
/// If an unrecognised argument or invalid option value is found, a message is printed and the process
/// exits with status 1.
pub fn parse_args(args: &[String], cfg: &mut Config) {
    'arg_examination: for arg in args.iter().skip(1) {
        let mut split = arg.split('=');
        match split.next() {
            Some("--max_clauses") => {
                let (min, max) = (cfg.max_clauses.min, cfg.max_clauses.max);

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            println!("c max_clauses set to: {value}");
                            cfg.max_clauses.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("max_clauses requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--max_iterations") => {
                let (min, max) = (cfg.max_iterations.min, cfg.max_iterations.max);

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            println!("c max_iterations set to: {value}");
                            cfg.max_iterations.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("max_iterations requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--time_limit") => {
                let min = cfg.time_limit.min.as_secs();
                let max = cfg.time_limit.max.as_secs();

                if let Some(request) = split.next() {
                    if let Ok(seconds) = request.parse::<u64>() {
                        if min <= seconds && seconds <= max {
                            println!("c time_limit set to: {seconds} seconds");
                            cfg.time_limit.value = std::time::Duration::from_secs(seconds);
                            continue 'arg_examination;
                        }
                    }
                }

                println!("time_limit requires a value in seconds between {min} and {max}");
                std::process::exit(1);
            }

            Some("--subsumption") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<bool>() {
                        println!("c subsumption set to: {value}");
                        cfg.subsumption_enabled.value = value;
                        continue 'arg_examination;
                    }
                }

                println!("subsumption requires true or false");
                std::process::exit(1);
            }

            Some(_) | None => {
                println!("Unable to parse argument: {arg:?}");
                std::process::exit(1);
            }
        }
    }
}
