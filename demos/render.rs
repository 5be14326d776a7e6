use life_engine::{patterns, Engine};

fn main() {
    let mut engine = Engine::from_pattern(patterns::GLIDER, None).unwrap();

    engine.step();
    engine.draw();
}
