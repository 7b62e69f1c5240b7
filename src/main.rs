fn main() {
    webmusic_client::start();
}
