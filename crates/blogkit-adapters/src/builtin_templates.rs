//! Built-in templates.
//!
//! These are the four files `blogkit scaffold` writes into a Next.js app
//! router project. Every interpolation sits inside a single-quoted string
//! literal and uses the default (escaping) slot, so user-supplied route
//! segments can never terminate the literal they are written into.
//!
//! Sources must not contain a literal `{{` outside a slot; JSX object
//! literals are written with a space (`{ {`) where needed.

use tracing::{debug, instrument};

use blogkit_core::domain::{Artifact, DomainError, Template};

/// Load all built-in templates, in [`Artifact::ALL`] order.
#[instrument]
pub fn all_templates() -> Result<Vec<Template>, DomainError> {
    let templates = Artifact::ALL
        .into_iter()
        .map(template_for)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = templates.len(), "built-in templates parsed");
    Ok(templates)
}

/// Parse the built-in template for one artifact.
pub fn template_for(artifact: Artifact) -> Result<Template, DomainError> {
    let (description, source) = match artifact {
        Artifact::BlogPage => ("Blog index and post detail route", BLOG_PAGE),
        Artifact::AdminPage => ("Blog admin route", ADMIN_PAGE),
        Artifact::SignInPage => ("Email/password sign-in route", SIGNIN_PAGE),
        Artifact::Middleware => ("Admin-guard middleware", MIDDLEWARE),
    };
    Template::parse(artifact, description, source)
}

const BLOG_PAGE: &str = r#"import { BlogModule } from '{{PACKAGE}}';

export default function BlogPage({ params }: { params: { slug?: string[] } }) {
  return <BlogModule slug={params.slug} />;
}
"#;

const ADMIN_PAGE: &str = r#"import { BlogAdmin } from '{{PACKAGE}}';

export default function AdminPage() {
  return <BlogAdmin />;
}
"#;

const SIGNIN_PAGE: &str = r#"'use client';
import { useEffect, useState } from 'react';
import { supabase } from '{{PACKAGE}}';

export default function SignInPage() {
  const [email, setEmail] = useState('');
  const [password, setPassword] = useState('');
  const [error, setError] = useState<string | null>(null);

  useEffect(() => {
    const { data: listener } = supabase.auth.onAuthStateChange((event, session) => {
      if ((event === 'SIGNED_IN' || event === 'INITIAL_SESSION') && session) {
        window.location.href = '/{{ADMIN_PATH}}';
      }
    });
    return () => listener.subscription.unsubscribe();
  }, []);

  const handleSignIn = async (e: React.FormEvent) => {
    e.preventDefault();
    setError(null);
    const { error } = await supabase.auth.signInWithPassword({ email, password });
    if (error) {
      setError(error.message);
      console.error('Sign-in error:', error);
    }
  };

  return (
    <div className="min-h-screen flex items-center justify-center bg-gray-800 px-6 py-12">
      <div className="w-full max-w-sm">
        <h2 className="mt-10 text-center text-2xl font-bold tracking-tight text-white">Sign in to your account</h2>
        <form onSubmit={handleSignIn} className="mt-10 space-y-6">
          <div>
            <label htmlFor="email" className="block text-sm font-medium text-gray-100">Email address</label>
            <div className="mt-2">
              <input id="email" type="email" value={email} onChange={(e) => setEmail(e.target.value)} placeholder="Email" required autoComplete="email" className="block w-full rounded-md bg-white/5 px-3 py-1.5 text-base text-white outline-1 -outline-offset-1 outline-white/10 placeholder:text-gray-500 focus:outline-2 focus:-outline-offset-2 focus:outline-indigo-500 sm:text-sm" />
            </div>
          </div>
          <div>
            <label htmlFor="password" className="block text-sm font-medium text-gray-100">Password</label>
            <div className="mt-2">
              <input id="password" type="password" value={password} onChange={(e) => setPassword(e.target.value)} placeholder="Password" required autoComplete="current-password" className="block w-full rounded-md bg-white/5 px-3 py-1.5 text-base text-white outline-1 -outline-offset-1 outline-white/10 placeholder:text-gray-500 focus:outline-2 focus:-outline-offset-2 focus:outline-indigo-500 sm:text-sm" />
            </div>
          </div>
          <button type="submit" className="flex w-full justify-center rounded-md bg-indigo-500 px-3 py-1.5 text-sm font-semibold text-white hover:bg-indigo-400 focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-indigo-500">Sign in</button>
        </form>
        {error && <p className="text-red-500 text-center mt-4">{error}</p>}
      </div>
    </div>
  );
}
"#;

const MIDDLEWARE: &str = r#"import { NextResponse } from 'next/server';
import type { NextRequest } from 'next/server';
import { createMiddlewareClient } from '@supabase/auth-helpers-nextjs';

export async function middleware(req: NextRequest) {
  const res = NextResponse.next();
  const supabase = createMiddlewareClient({ req, res });
  const { data: { session } } = await supabase.auth.getSession();
  if (!session) {
    const redirectUrl = new URL('/{{AUTH_PATH}}', req.url);
    redirectUrl.searchParams.set('redirectedFrom', req.nextUrl.pathname);
    return NextResponse.redirect(redirectUrl);
  }
  return res;
}

export const config = { matcher: ['/{{ADMIN_PATH}}', '/{{ADMIN_PATH}}/:path*'] };
"#;
