fn main() {
    di2d::run();
}
