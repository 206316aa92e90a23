mod redirect;

pub(crate) use redirect::RedirectHandler;
