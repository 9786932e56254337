use maxrects::{Heuristic, Item, MaxRectsPacker};

fn main() {
    env_logger::init();

    let inputs: Vec<_> = (0..5).map(|_| Item::new((128, 128))).collect();

    let mut packer = MaxRectsPacker::new((256, 256));
    let result = packer.pack(inputs, Heuristic::BestShortSide);

    println!("Pack result: {:#?}", result);
    println!("Utilization: {:.1}%", result.utilization() * 100.0);
}
