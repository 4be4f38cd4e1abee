use std::io;

pub trait LinkOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}
