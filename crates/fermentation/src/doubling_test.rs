mod tests {
    use approx::assert_relative_eq;
    use units::{Temperature, Time};

    use crate::doubling::{doubling_time, required_idy};
    use crate::recipe::Recipe;

    fn recipe(idy: f64, salt: f64, hydration: f64, celsius: f64) -> Recipe {
        Recipe::new(idy, salt, hydration, Temperature::from_celsius(celsius))
    }

    #[test]
    fn reference_conditions_double_in_one_hour() {
        // 0.4 % IDY, no salt, 60 % hydration at 30 °C is the model's unit
        // point: every factor is exactly 1.
        let dt = doubling_time(&recipe(0.4, 0.0, 60.0, 30.0));
        assert_relative_eq!(dt.to_minutes(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn neapolitan_recipe_expected_value() {
        // (0.4/0.5) * 2^0.6 * (60/63) * 1.14 hours = 78.99 minutes
        let dt = doubling_time(&Recipe::neapolitan());
        assert_relative_eq!(dt.to_minutes(), 78.990_486_208_999, epsilon = 1e-9);
    }

    #[test]
    fn doubling_time_is_finite_and_positive_for_viable_recipes() {
        for idy in [0.003, 0.1, 0.5, 3.0] {
            for hydration in [50.0, 63.0, 100.0] {
                let dt = doubling_time(&recipe(idy, 2.0, hydration, 24.0));
                assert!(dt.is_finite());
                assert!(dt.to_minutes() > 0.0);
            }
        }
    }

    #[test]
    fn more_yeast_proofs_faster() {
        let slow = doubling_time(&recipe(0.2, 2.8, 63.0, 24.0));
        let fast = doubling_time(&recipe(0.4, 2.8, 63.0, 24.0));
        let faster = doubling_time(&recipe(0.8, 2.8, 63.0, 24.0));

        assert!(fast < slow);
        assert!(faster < fast);

        // Doubling time scales exactly inversely with yeast percentage
        assert_relative_eq!(slow.to_minutes(), fast.to_minutes() * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn wetter_dough_proofs_faster() {
        let dry = doubling_time(&recipe(0.5, 2.8, 55.0, 24.0));
        let wet = doubling_time(&recipe(0.5, 2.8, 70.0, 24.0));
        assert!(wet < dry);
    }

    #[test]
    fn warmer_dough_proofs_faster() {
        let cold = doubling_time(&recipe(0.5, 2.8, 63.0, 4.0));
        let ambient = doubling_time(&recipe(0.5, 2.8, 63.0, 24.0));
        let warm = doubling_time(&recipe(0.5, 2.8, 63.0, 34.0));

        assert!(ambient < cold);
        assert!(warm < ambient);

        // Each 10 °C drop doubles the doubling time
        let at_30 = doubling_time(&recipe(0.4, 0.0, 60.0, 30.0));
        let at_20 = doubling_time(&recipe(0.4, 0.0, 60.0, 20.0));
        assert_relative_eq!(
            at_20.to_minutes(),
            at_30.to_minutes() * 2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn salt_retards_fermentation() {
        let unsalted = doubling_time(&recipe(0.5, 0.0, 63.0, 24.0));
        let salted = doubling_time(&recipe(0.5, 3.0, 63.0, 24.0));

        assert!(salted > unsalted);

        // 3 % salt slows fermentation by exactly 15 %
        assert_relative_eq!(
            salted.to_minutes(),
            unsalted.to_minutes() * 1.15,
            epsilon = 1e-9
        );
    }

    #[test]
    fn degenerate_recipes_never_proof() {
        assert!(doubling_time(&recipe(0.0, 2.8, 63.0, 24.0)).is_infinite());
        assert!(doubling_time(&recipe(-0.5, 2.8, 63.0, 24.0)).is_infinite());
        assert!(doubling_time(&recipe(0.5, 2.8, 0.0, 24.0)).is_infinite());
        assert!(doubling_time(&recipe(0.5, 2.8, -10.0, 24.0)).is_infinite());
    }

    #[test]
    fn required_idy_degenerate_targets() {
        let temp = Temperature::from_celsius(24.0);
        assert_eq!(required_idy(Time::zero(), 2.8, 63.0, temp), 0.0);
        assert_eq!(required_idy(Time::from_minutes(-5.0), 2.8, 63.0, temp), 0.0);
        assert_eq!(required_idy(Time::from_minutes(90.0), 2.8, 0.0, temp), 0.0);
    }

    #[test]
    fn required_idy_reference_point() {
        let idy = required_idy(
            Time::from_hours(1.0),
            0.0,
            60.0,
            Temperature::from_celsius(30.0),
        );
        assert_eq!(idy, 0.4);
    }

    #[test]
    fn required_idy_is_rounded_to_four_decimals() {
        let idy = required_idy(
            Time::from_minutes(210.0),
            2.8,
            63.0,
            Temperature::from_celsius(24.0),
        );
        assert_eq!(idy, 0.1881);
        assert_eq!((idy * 10_000.0).fract(), 0.0);
    }

    #[test]
    fn round_trip_recovers_target_time() {
        // Short and medium targets land within half a minute; for long
        // targets the 4-decimal quantization of idy bounds the error by
        // target * 5e-5 / idy.
        for salt in [0.0, 1.5, 3.0] {
            for hydration in [50.0, 63.0, 100.0] {
                for celsius in [2.0, 24.0, 38.0] {
                    let temp = Temperature::from_celsius(celsius);
                    for target in [30.0, 90.0, 210.0, 1_000.0, 10_000.0] {
                        let idy = required_idy(Time::from_minutes(target), salt, hydration, temp);
                        assert!(idy > 0.0);

                        let dt = doubling_time(&Recipe::new(idy, salt, hydration, temp));
                        let tolerance = (target * 5e-5 / idy).max(0.5);
                        assert!(
                            (dt.to_minutes() - target).abs() <= tolerance,
                            "target {} min came back as {} min (salt {}, hydration {}, {} °C)",
                            target,
                            dt.to_minutes(),
                            salt,
                            hydration,
                            celsius
                        );

                        if target <= 210.0 {
                            assert!((dt.to_minutes() - target).abs() <= 0.5);
                        }
                    }
                }
            }
        }
    }
}
