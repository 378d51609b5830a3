fn main() -> eframe::Result {
    croppable::run_native()
}
