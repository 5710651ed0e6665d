//! End-to-end generation scenarios against the public API.

#[cfg(test)]
mod tests {
    use passgen::{
        CharClass, Charset, Command, Configuration, Controller, GenerationError, Outcome,
        RandomSource, RandomSourceError, generate, generate_with,
    };

    /// A random source that reports failure for every request.
    struct FailingSource {
        /// Number of fill requests seen.
        calls: usize,
    }

    impl RandomSource for FailingSource {
        fn fill(&mut self, _buf: &mut [u8]) -> Result<(), RandomSourceError> {
            self.calls += 1;
            Err(RandomSourceError::new("simulated provider failure"))
        }
    }

    /// Records the size of every request and fills with a counter.
    struct CountingSource {
        /// Requested buffer sizes, in order.
        requests: Vec<usize>,
    }

    impl RandomSource for CountingSource {
        fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandomSourceError> {
            self.requests.push(buf.len());
            for (i, b) in buf.iter_mut().enumerate() {
                *b = (i % 256) as u8;
            }
            Ok(())
        }
    }

    fn all_off() -> Configuration {
        let mut c = Configuration::default();
        for class in CharClass::ALL {
            c.toggle(class);
        }
        c
    }

    #[test]
    fn scenario_a_default_options() {
        let cfg = Configuration::default();
        let charset = Charset::from_config(&cfg).expect("charset");
        assert_eq!(
            charset.to_string(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*"
        );
        assert_eq!(charset.len(), 70);

        let pw = generate(&cfg).expect("generate");
        assert_eq!(pw.len(), 16);
        assert!(pw.as_str().chars().all(|c| charset.contains(c)));
    }

    #[test]
    fn scenario_b_nothing_selected() {
        let cfg = all_off();
        assert_eq!(generate(&cfg), Err(GenerationError::EmptyCharset));
    }

    #[test]
    fn scenario_c_single_uppercase_letter() {
        let mut cfg = all_off();
        cfg.toggle_uppercase();
        cfg.set_length(1);
        let pw = generate(&cfg).expect("generate");
        assert_eq!(pw.len(), 1);
        assert!(pw.as_str().chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn scenario_d_random_source_failure() {
        let mut source = FailingSource { calls: 0 };
        let out = generate_with(&Configuration::default(), &mut source);
        assert!(matches!(out, Err(GenerationError::RandomSource(_))));
        assert_eq!(source.calls, 1, "failures are not retried");
    }

    #[test]
    fn bytes_requested_in_one_call() {
        let mut cfg = Configuration::default();
        cfg.set_length(32);
        let mut source = CountingSource {
            requests: Vec::new(),
        };
        let pw = generate_with(&cfg, &mut source).expect("generate");
        assert_eq!(source.requests, [32]);
        // Counter bytes 0..32 walk the start of the charset in order
        assert_eq!(pw.as_str(), "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdef");
    }

    #[test]
    fn wraparound_follows_modulo() {
        let mut cfg = all_off();
        cfg.toggle_digits();
        cfg.set_length(256);
        let mut source = CountingSource {
            requests: Vec::new(),
        };
        let pw = generate_with(&cfg, &mut source).expect("generate");
        // byte 255 -> index 5
        assert_eq!(pw.as_str().chars().last(), Some('5'));
        // bytes 250..256 -> 0..6 modulo 10
        assert!(pw.as_str().ends_with("012345"));
    }

    #[test]
    fn controller_menu_round_trip() {
        let mut ctl: Controller = Controller::default();
        let menu = ctl.menu();
        let entry = menu
            .submenu("Length")
            .and_then(|e| e.iter().find(|e| e.title == "24 characters"))
            .expect("24 entry");
        let cmd = entry.command.expect("command");
        assert_eq!(cmd, Command::SetLength(24));
        assert_eq!(ctl.handle(cmd), Outcome::Updated);
        match ctl.handle(Command::GenerateRequested) {
            Outcome::Generated(pw) => assert_eq!(pw.len(), 24),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn generation_does_not_mutate_options() {
        let cfg = Configuration::default().with_special_alphabet("-_");
        let snapshot = cfg.clone();
        let _pw = generate(&cfg).expect("generate");
        let _err = generate_with(&cfg, &mut FailingSource { calls: 0 });
        assert_eq!(cfg, snapshot);
    }
}
